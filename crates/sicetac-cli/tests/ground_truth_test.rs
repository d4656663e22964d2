//! Ground truth regression test
//!
//! Runs the full quote pipeline over a fixture table set whose results
//! were computed by hand, and checks every line of the breakdown.
//!
//! Fixture vehicle C3S3, month 202601: fuel $10,000/gal, variable cost
//! $2,000/km, fixed cost (GENERAL) $3,600,000/month. A 185 km profile
//! (120 flat @ 60 km/h / 10 km/gal, 40 rolling @ 40 / 8, 25 urban @
//! 25 / 5) takes 4 h and 22 gal; with the 4 h logistics default the
//! cycle is 8 h, so 288 / 8 = 36 trips/month.

use std::fs;
use std::path::Path;

use sicetac_app::{QuoteRequest, QuoteService};
use sicetac_infra::CsvTableStore;

fn write_tables(dir: &Path) {
    fs::write(
        dir.join("municipios.csv"),
        concat!(
            "CODIGO_DANE,NOMBRE_OFICIAL,VARIACION_1,VARIACION_2,VARIACION_3,DEPARTAMENTO\n",
            "5001000,MEDELLIN,MEDELLÍN,,,ANTIOQUIA\n",
            "11001000,BOGOTA,BOGOTÁ D.C.,,,CUNDINAMARCA\n",
            "76001000,CALI,SANTIAGO DE CALI,,,VALLE DEL CAUCA\n",
        ),
    )
    .unwrap();
    fs::write(
        dir.join("configuracion_vehicular.csv"),
        "TIPO_VEHICULO,EJES_CONFIGURACION,DESCRIPCION\nC3S3,3S3,TRACTOCAMION\n",
    )
    .unwrap();
    fs::write(
        dir.join("parametros.csv"),
        concat!(
            "TIPO_VEHICULO,MES,",
            "PLANO VELOCIDAD PROMEDIO  CARGADO,PLANO CONSUMO DE COMBUSTIBLE  CARGADO,",
            "ONDULADO VELOCIDAD PROMEDIO CARGADO,ONDULADO CONSUMO DE COMBUSTIBLE CARGADO,",
            "MONTAÑA VELOCIDAD PROMEDIO CARGADO,MONTAÑA CONSUMO DE COMBUSTIBLE CARGADO,",
            "RECORRIDO URBANO VELOCIDAD PROMEDIO CARGADO,RECORRIDO URBANO CONSUMO DE COMBUSTIBLE CARGADO,",
            "AFIRMADO VELOCIDAD PROMEDIO CARGADO,AFIRMADO CONSUMO DE COMBUSTIBLE CARGADO,",
            "VALOR COMBUSTIBLE GALÓN ACPM,COSTOS VARIABLES\n",
            "C3S3,202601,60,10,40,8,30,6,25,5,20,4,10000,2000\n",
        ),
    )
    .unwrap();
    fs::write(
        dir.join("costos_fijos.csv"),
        "TIPO_VEHICULO,MES,TIPO_CARROCERIA,COSTO FIJO\nC3S3,202601,GENERAL,3600000\n",
    )
    .unwrap();
    fs::write(
        dir.join("peajes.csv"),
        "ID_SICE,EJES_CONFIGURACION,VALOR_PEAJE\n101,3S3,80000\n",
    )
    .unwrap();
    fs::write(
        dir.join("rutas.csv"),
        concat!(
            "ID_SICE,NOMBRE_SICE,CODIGO_DANE_ORIGEN,CODIGO_DANE_DESTINO,",
            "KM_PLANO,KM_ONDULADO,KM_MONTAÑOSO,KM_URBANO,KM_DESPAVIMENTADO\n",
            "101,MEDELLIN-BOGOTA,5001000,11001000,120,40,0,25,0\n",
        ),
    )
    .unwrap();
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn manual_route_matches_hand_computed_breakdown() {
    let dir = tempfile::tempdir().unwrap();
    write_tables(dir.path());
    let service = QuoteService::new(CsvTableStore::new(dir.path()));

    // unregistered pair, so the manual profile and manual toll apply
    let mut request = QuoteRequest::new("Medellin", "Cali");
    request.flat_km = 120.0;
    request.rolling_km = 40.0;
    request.urban_km = 25.0;
    request.manual_toll = 50_000.0;

    let quote = service.compute(&request).unwrap().sicetac.unwrap();
    let b = &quote.breakdown;

    assert_close(b.travel_hours, 4.0);
    assert_close(b.logistics_hours, 4.0);
    assert_close(b.trips_per_month, 36.0);
    assert_close(b.fixed_cost, 100_000.0); // 3,600,000 / 36
    assert_close(b.fuel_cost, 220_000.0); // 22 gal x 10,000
    assert_close(b.tolls, 50_000.0);
    assert_close(b.variable_cost, 370_000.0); // 185 km x 2,000
    assert_close(b.contingency, 27_750.0); // 7.5% of variable
    // 0.199824 x (100,000 + 667,750)
    assert_close(b.overhead, 153_414.88);
    assert_close(b.total, 921_164.88);

    assert_close(b.detail.flat.hours, 2.0);
    assert_close(b.detail.flat.gallons, 12.0);
    assert_close(b.detail.rolling.hours, 1.0);
    assert_close(b.detail.urban.gallons, 5.0);
}

#[test]
fn official_route_uses_the_toll_table() {
    let dir = tempfile::tempdir().unwrap();
    write_tables(dir.path());
    let service = QuoteService::new(CsvTableStore::new(dir.path()));

    let quote = service
        .compute(&QuoteRequest::new("MEDELLIN", "BOGOTA"))
        .unwrap()
        .sicetac
        .unwrap();
    let b = &quote.breakdown;

    assert_close(b.tolls, 80_000.0);
    // 0.199824 x (100,000 + 697,750)
    assert_close(b.overhead, 159_409.60);
    assert_close(b.total, 957_159.60);
}

#[test]
fn custom_hours_beyond_eight_are_billed_as_standby() {
    let dir = tempfile::tempdir().unwrap();
    write_tables(dir.path());
    let service = QuoteService::new(CsvTableStore::new(dir.path()));

    let mut request = QuoteRequest::new("Medellin", "Cali");
    request.flat_km = 120.0;
    request.rolling_km = 40.0;
    request.urban_km = 25.0;
    request.manual_toll = 50_000.0;
    request.custom_logistics_hours = Some(10.0);

    let quote = service.compute(&request).unwrap().sicetac.unwrap();
    let standby = quote.standby.unwrap();

    assert_close(standby.user_hours, 10.0);
    assert_close(standby.base_hours, 8.0);
    assert_close(standby.extra_hours, 2.0);
    assert_close(standby.standby_cost, 300_000.0); // 2 h x 150,000

    // engine ran with 8 logistics hours: 12 h cycle, 24 trips
    let b = &quote.breakdown;
    assert_close(b.logistics_hours, 8.0);
    assert_close(b.trips_per_month, 24.0);
    assert_close(standby.adjusted_total, b.total + 300_000.0);
}

#[test]
fn json_wire_format_keeps_the_original_keys() {
    let dir = tempfile::tempdir().unwrap();
    write_tables(dir.path());
    let service = QuoteService::new(CsvTableStore::new(dir.path()));

    let response = service
        .compute(&QuoteRequest::new("MEDELLIN", "BOGOTA"))
        .unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["MODO_VIAJE"], "CARGADO");
    let sicetac = &json["SICETAC"];
    assert_eq!(sicetac["origen"], "MEDELLIN");
    assert_eq!(sicetac["configuracion"], "C3S3");
    assert_eq!(sicetac["total_viaje"], 957_159.60);
    assert_eq!(sicetac["recorridos_mes"], 36.0);
    assert!(sicetac["detalle_via"]["montaña"].is_object());
    // single-route pair, no variant or scenario blocks
    assert!(json.get("SICETAC_VARIANTES").is_none());
    assert!(json.get("ESCENARIOS_TIEMPOS_LOGISTICOS").is_none());
}
