//! Typed CSV loaders for the six SICETAC lookup tables
//!
//! Headers are normalized (trimmed, uppercased, whitespace collapsed to
//! underscores) before column lookup, so the accented and double-spaced
//! spellings of the source spreadsheets all resolve to the same column.
//! Required columns and numeric coercion are validated at load time.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use sicetac_domain::model::{
    DistanceProfile, FixedCostRow, Municipality, RouteRow, TableSnapshot, TerrainRateSet,
    TerrainRates, TollRow, VehicleConfig, VehicleParamRow,
};
use sicetac_types::{Error, Result};

/// File locations for one table directory
///
/// File names mirror the original table names, one CSV per table.
#[derive(Clone, Debug)]
pub struct TablePaths {
    pub municipalities: PathBuf,
    pub vehicles: PathBuf,
    pub parameters: PathBuf,
    pub fixed_costs: PathBuf,
    pub tolls: PathBuf,
    pub routes: PathBuf,
}

impl TablePaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            municipalities: dir.join("municipios.csv"),
            vehicles: dir.join("configuracion_vehicular.csv"),
            parameters: dir.join("parametros.csv"),
            fixed_costs: dir.join("costos_fijos.csv"),
            tolls: dir.join("peajes.csv"),
            routes: dir.join("rutas.csv"),
        }
    }
}

/// Load all six tables from `dir` into a fresh snapshot
pub fn load_snapshot(dir: &Path) -> Result<TableSnapshot> {
    let paths = TablePaths::in_dir(dir);
    Ok(TableSnapshot::new(
        load_municipalities(&paths.municipalities)?,
        load_vehicle_configs(&paths.vehicles)?,
        load_parameters(&paths.parameters)?,
        load_fixed_costs(&paths.fixed_costs)?,
        load_tolls(&paths.tolls)?,
        load_routes(&paths.routes)?,
    ))
}

/// Strip float artifacts from identifier cells ("5001000.0" -> "5001000")
pub fn clean_code(s: &str) -> String {
    let s = s.trim();
    if let Ok(f) = s.parse::<f64>() {
        if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 {
            return (f as i64).to_string();
        }
    }
    s.to_string()
}

fn normalize_header(h: &str) -> String {
    h.trim()
        .to_uppercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Column index map for one loaded table
struct HeaderMap {
    table: &'static str,
    index: HashMap<String, usize>,
}

impl HeaderMap {
    /// Index of the first matching candidate spelling
    fn col(&self, candidates: &[&str]) -> Result<usize> {
        self.opt_col(candidates)
            .ok_or_else(|| Error::MissingColumn {
                table: self.table.to_string(),
                column: candidates[0].to_string(),
            })
    }

    fn opt_col(&self, candidates: &[&str]) -> Option<usize> {
        candidates
            .iter()
            .find_map(|c| self.index.get(&normalize_header(c)).copied())
    }

    fn str_at(&self, record: &StringRecord, idx: usize) -> String {
        record.get(idx).unwrap_or("").trim().to_string()
    }

    /// Numeric cell; empty cells coerce to 0, anything else must parse
    fn f64_at(&self, record: &StringRecord, idx: usize, column: &str) -> Result<f64> {
        let raw = record.get(idx).unwrap_or("").trim();
        if raw.is_empty() {
            return Ok(0.0);
        }
        raw.parse::<f64>().map_err(|_| Error::InvalidNumber {
            table: self.table.to_string(),
            column: column.to_string(),
            value: raw.to_string(),
        })
    }

    /// Month cell; tolerates the "202601.0" float spelling
    fn month_at(&self, record: &StringRecord, idx: usize, column: &str) -> Result<u32> {
        let raw = clean_code(record.get(idx).unwrap_or(""));
        raw.parse::<u32>().map_err(|_| Error::InvalidNumber {
            table: self.table.to_string(),
            column: column.to_string(),
            value: raw,
        })
    }
}

fn read_table(path: &Path, table: &'static str) -> Result<(Vec<StringRecord>, HeaderMap)> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;
    let index = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| (normalize_header(h), i))
        .collect();
    let headers = HeaderMap { table, index };
    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        records.push(record);
    }
    Ok((records, headers))
}

pub fn load_municipalities(path: &Path) -> Result<Vec<Municipality>> {
    let (records, h) = read_table(path, "municipios")?;
    let code = h.col(&["CODIGO_DANE"])?;
    let name = h.col(&["NOMBRE_OFICIAL"])?;
    let variations: Vec<usize> = ["VARIACION_1", "VARIACION_2", "VARIACION_3"]
        .into_iter()
        .filter_map(|c| h.opt_col(&[c]))
        .collect();
    let department = h.opt_col(&["DEPARTAMENTO"]);

    let mut rows = Vec::with_capacity(records.len());
    for record in &records {
        rows.push(Municipality {
            code: clean_code(&h.str_at(record, code)),
            official_name: h.str_at(record, name),
            variations: variations
                .iter()
                .map(|&i| h.str_at(record, i))
                .filter(|v| !v.is_empty())
                .collect(),
            department: department
                .map(|i| h.str_at(record, i))
                .filter(|d| !d.is_empty()),
        });
    }
    Ok(rows)
}

pub fn load_vehicle_configs(path: &Path) -> Result<Vec<VehicleConfig>> {
    let (records, h) = read_table(path, "configuracion_vehicular")?;
    let vehicle = h.col(&["TIPO_VEHICULO"])?;
    let axles = h.col(&["EJES_CONFIGURACION"])?;
    let description = h.opt_col(&["DESCRIPCION", "DESCRIPCIÓN"]);

    let mut rows = Vec::with_capacity(records.len());
    for record in &records {
        rows.push(VehicleConfig {
            vehicle_type: h.str_at(record, vehicle).to_uppercase(),
            axle_config: clean_code(&h.str_at(record, axles)),
            description: description
                .map(|i| h.str_at(record, i))
                .filter(|d| !d.is_empty()),
        });
    }
    Ok(rows)
}

/// Column spellings for one terrain's loaded/empty speed and consumption
struct TerrainColumns {
    speed_loaded: &'static [&'static str],
    consumption_loaded: &'static [&'static str],
    speed_empty: &'static [&'static str],
    consumption_empty: &'static [&'static str],
}

const TERRAIN_COLUMNS: [TerrainColumns; 5] = [
    TerrainColumns {
        speed_loaded: &["PLANO VELOCIDAD PROMEDIO CARGADO"],
        consumption_loaded: &["PLANO CONSUMO DE COMBUSTIBLE CARGADO"],
        speed_empty: &["PLANO VELOCIDAD PROMEDIO VACIO"],
        consumption_empty: &["PLANO CONSUMO DE COMBUSTIBLE VACIO"],
    },
    TerrainColumns {
        speed_loaded: &["ONDULADO VELOCIDAD PROMEDIO CARGADO"],
        consumption_loaded: &["ONDULADO CONSUMO DE COMBUSTIBLE CARGADO"],
        speed_empty: &["ONDULADO VELOCIDAD PROMEDIO VACIO"],
        consumption_empty: &["ONDULADO CONSUMO DE COMBUSTIBLE VACIO"],
    },
    TerrainColumns {
        speed_loaded: &[
            "MONTAÑA VELOCIDAD PROMEDIO CARGADO",
            "MONTANA VELOCIDAD PROMEDIO CARGADO",
        ],
        consumption_loaded: &[
            "MONTAÑA CONSUMO DE COMBUSTIBLE CARGADO",
            "MONTANA CONSUMO DE COMBUSTIBLE CARGADO",
        ],
        speed_empty: &[
            "MONTAÑA VELOCIDAD PROMEDIO VACIO",
            "MONTANA VELOCIDAD PROMEDIO VACIO",
        ],
        consumption_empty: &[
            "MONTAÑA CONSUMO DE COMBUSTIBLE VACIO",
            "MONTANA CONSUMO DE COMBUSTIBLE VACIO",
        ],
    },
    TerrainColumns {
        speed_loaded: &["RECORRIDO URBANO VELOCIDAD PROMEDIO CARGADO"],
        consumption_loaded: &["RECORRIDO URBANO CONSUMO DE COMBUSTIBLE CARGADO"],
        speed_empty: &["RECORRIDO URBANO VELOCIDAD PROMEDIO VACIO"],
        consumption_empty: &["RECORRIDO URBANO CONSUMO DE COMBUSTIBLE VACIO"],
    },
    TerrainColumns {
        speed_loaded: &["AFIRMADO VELOCIDAD PROMEDIO CARGADO"],
        consumption_loaded: &["AFIRMADO CONSUMO DE COMBUSTIBLE CARGADO"],
        speed_empty: &["AFIRMADO VELOCIDAD PROMEDIO VACIO"],
        consumption_empty: &["AFIRMADO CONSUMO DE COMBUSTIBLE VACIO"],
    },
];

pub fn load_parameters(path: &Path) -> Result<Vec<VehicleParamRow>> {
    let (records, h) = read_table(path, "parametros")?;
    let vehicle = h.col(&["TIPO_VEHICULO"])?;
    let month = h.col(&["MES", "MES_CODIGO"])?;
    let fuel = h.col(&[
        "VALOR COMBUSTIBLE GALÓN ACPM",
        "VALOR COMBUSTIBLE GALON ACPM",
    ])?;
    let variable = h.col(&["COSTOS VARIABLES"])?;
    // empty-trip columns are optional; absent ones fall back to loaded
    let variable_empty = h.opt_col(&["COSTOS VARIABLES VACIO"]);

    struct ResolvedTerrain {
        speed_loaded: usize,
        consumption_loaded: usize,
        speed_empty: Option<usize>,
        consumption_empty: Option<usize>,
    }
    let mut terrain_cols = Vec::with_capacity(5);
    for cols in &TERRAIN_COLUMNS {
        terrain_cols.push(ResolvedTerrain {
            speed_loaded: h.col(cols.speed_loaded)?,
            consumption_loaded: h.col(cols.consumption_loaded)?,
            speed_empty: h.opt_col(cols.speed_empty),
            consumption_empty: h.opt_col(cols.consumption_empty),
        });
    }

    let mut rows = Vec::with_capacity(records.len());
    for record in &records {
        let mut loaded = [TerrainRates::default(); 5];
        let mut empty = [TerrainRates::default(); 5];
        for (i, cols) in terrain_cols.iter().enumerate() {
            let speed = h.f64_at(record, cols.speed_loaded, "VELOCIDAD")?;
            let consumption = h.f64_at(record, cols.consumption_loaded, "CONSUMO")?;
            loaded[i] = TerrainRates {
                speed_kmh: speed,
                km_per_gallon: consumption,
            };
            empty[i] = TerrainRates {
                speed_kmh: match cols.speed_empty {
                    Some(idx) => h.f64_at(record, idx, "VELOCIDAD VACIO")?,
                    None => speed,
                },
                km_per_gallon: match cols.consumption_empty {
                    Some(idx) => h.f64_at(record, idx, "CONSUMO VACIO")?,
                    None => consumption,
                },
            };
        }
        let variable_cost = h.f64_at(record, variable, "COSTOS VARIABLES")?;
        rows.push(VehicleParamRow {
            vehicle_type: h.str_at(record, vehicle).to_uppercase(),
            month: h.month_at(record, month, "MES")?,
            loaded: rate_set(loaded),
            empty: rate_set(empty),
            fuel_price_per_gallon: h.f64_at(record, fuel, "VALOR COMBUSTIBLE")?,
            variable_cost_per_km: variable_cost,
            empty_variable_cost_per_km: match variable_empty {
                Some(idx) => h.f64_at(record, idx, "COSTOS VARIABLES VACIO")?,
                None => variable_cost,
            },
        });
    }
    Ok(rows)
}

fn rate_set(r: [TerrainRates; 5]) -> TerrainRateSet {
    TerrainRateSet {
        flat: r[0],
        rolling: r[1],
        mountain: r[2],
        urban: r[3],
        unpaved: r[4],
    }
}

pub fn load_fixed_costs(path: &Path) -> Result<Vec<FixedCostRow>> {
    let (records, h) = read_table(path, "costos_fijos")?;
    let vehicle = h.col(&["TIPO_VEHICULO"])?;
    let month = h.col(&["MES", "MES_CODIGO"])?;
    let body = h.col(&["TIPO_CARROCERIA"])?;
    let cost = h.col(&["COSTO FIJO"])?;

    let mut rows = Vec::with_capacity(records.len());
    for record in &records {
        rows.push(FixedCostRow {
            vehicle_type: h.str_at(record, vehicle).to_uppercase(),
            month: h.month_at(record, month, "MES")?,
            body_type: h.str_at(record, body).to_uppercase(),
            monthly_cost: h.f64_at(record, cost, "COSTO FIJO")?,
        });
    }
    Ok(rows)
}

pub fn load_tolls(path: &Path) -> Result<Vec<TollRow>> {
    let (records, h) = read_table(path, "peajes")?;
    let route = h.col(&["ID_SICE"])?;
    let axles = h.col(&["EJES_CONFIGURACION"])?;
    let value = h.col(&["VALOR_PEAJE"])?;

    let mut rows = Vec::with_capacity(records.len());
    for record in &records {
        rows.push(TollRow {
            route_id: clean_code(&h.str_at(record, route)),
            axle_config: clean_code(&h.str_at(record, axles)),
            value: h.f64_at(record, value, "VALOR_PEAJE")?,
        });
    }
    Ok(rows)
}

pub fn load_routes(path: &Path) -> Result<Vec<RouteRow>> {
    let (records, h) = read_table(path, "rutas")?;
    let route = h.col(&["ID_SICE"])?;
    let name = h.opt_col(&["NOMBRE_SICE", "RUTA"]);
    let origin = h.col(&["CODIGO_DANE_ORIGEN"])?;
    let destination = h.col(&["CODIGO_DANE_DESTINO"])?;
    // km columns default to 0 when absent, matching the source's row.get
    let km = |names: &[&str]| h.opt_col(names);
    let flat = km(&["KM_PLANO"]);
    let rolling = km(&["KM_ONDULADO"]);
    let mountain = km(&["KM_MONTAÑOSO", "KM_MONTANOSO"]);
    let urban = km(&["KM_URBANO"]);
    let unpaved = km(&["KM_DESPAVIMENTADO"]);

    let mut rows = Vec::with_capacity(records.len());
    for record in &records {
        let km_at = |col: Option<usize>, label: &str| -> Result<f64> {
            match col {
                Some(idx) => h.f64_at(record, idx, label),
                None => Ok(0.0),
            }
        };
        rows.push(RouteRow {
            route_id: clean_code(&h.str_at(record, route)),
            route_name: name.map(|i| h.str_at(record, i)).filter(|n| !n.is_empty()),
            origin_code: clean_code(&h.str_at(record, origin)),
            destination_code: clean_code(&h.str_at(record, destination)),
            distances: DistanceProfile {
                flat_km: km_at(flat, "KM_PLANO")?,
                rolling_km: km_at(rolling, "KM_ONDULADO")?,
                mountain_km: km_at(mountain, "KM_MONTAÑOSO")?,
                urban_km: km_at(urban, "KM_URBANO")?,
                unpaved_km: km_at(unpaved, "KM_DESPAVIMENTADO")?,
            },
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_code() {
        assert_eq!(clean_code("5001000.0"), "5001000");
        assert_eq!(clean_code(" 5001000 "), "5001000");
        assert_eq!(clean_code("3S3"), "3S3");
        assert_eq!(clean_code("11001000"), "11001000");
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(
            normalize_header("PLANO VELOCIDAD PROMEDIO  CARGADO"),
            "PLANO_VELOCIDAD_PROMEDIO_CARGADO"
        );
        assert_eq!(normalize_header(" costo fijo "), "COSTO_FIJO");
        assert_eq!(normalize_header("MES"), "MES");
    }
}
