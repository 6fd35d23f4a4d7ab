use std::fmt;
use std::str::FromStr;
use crate::database::enums::database_drivers::DatabaseDrivers;

impl fmt::Display for DatabaseDrivers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseDrivers::mysql => write!(f, "mysql"),
            DatabaseDrivers::pgsql => write!(f, "pgsql"),
        }
    }
}

impl FromStr for DatabaseDrivers {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(DatabaseDrivers::mysql),
            "pgsql" | "postgres" | "postgresql" => Ok(DatabaseDrivers::pgsql),
            other => Err(other.to_string()),
        }
    }
}
