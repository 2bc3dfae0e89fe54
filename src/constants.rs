// INE Tempus JSON API
pub const INE_BASE_URL: &str = "https://servicios.ine.es/wstempus/js/es";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

// Table 33784: population by sex, municipality and nationality
pub const POPULATION_TABLE_ID: &str = "33784";
pub const MUNICIPALITY_VARIABLE_ID: &str = "96193";
pub const TARGET_DATE: &str = "20230101";

// Composite label layout
pub const LABEL_DELIMITER: char = '.';
pub const TOTAL_MARKER: &str = "Total";
pub const SPANISH_MARKER: &str = "Española";
pub const FOREIGN_MARKER: &str = "Extranjera";

// Output shape
pub const BREAKDOWN_LIMIT: usize = 10;
pub const SIMULATED_DATA_SUFFIX: &str = "(Simulated Data)";

// HTTP surface
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5328";
pub const MUNICIPALITY_PARAM: &str = "municipality";
