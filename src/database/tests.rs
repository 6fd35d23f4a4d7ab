#[cfg(test)]
mod database_tests {
    mod database_drivers_tests {
        use std::str::FromStr;
        use serde::{Deserialize, Serialize};
        use crate::database::enums::database_drivers::DatabaseDrivers;

        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            engine: DatabaseDrivers,
        }

        #[test]
        fn test_database_drivers_default() {
            assert_eq!(DatabaseDrivers::default(), DatabaseDrivers::mysql);
        }

        #[test]
        fn test_database_drivers_display() {
            assert_eq!(format!("{}", DatabaseDrivers::mysql), "mysql");
            assert_eq!(format!("{}", DatabaseDrivers::pgsql), "pgsql");
        }

        #[test]
        fn test_database_drivers_from_str() {
            assert_eq!(DatabaseDrivers::from_str("mysql"), Ok(DatabaseDrivers::mysql));
            assert_eq!(DatabaseDrivers::from_str("MariaDB"), Ok(DatabaseDrivers::mysql));
            assert_eq!(DatabaseDrivers::from_str("pgsql"), Ok(DatabaseDrivers::pgsql));
            assert_eq!(DatabaseDrivers::from_str(" Postgres "), Ok(DatabaseDrivers::pgsql));
            assert_eq!(DatabaseDrivers::from_str("sqlite3"), Err("sqlite3".to_string()));
        }

        #[test]
        fn test_database_drivers_toml() {
            let wrapper: Wrapper = toml::from_str("engine = \"pgsql\"").unwrap();
            assert_eq!(wrapper.engine, DatabaseDrivers::pgsql);
            let rendered = toml::to_string(&Wrapper { engine: DatabaseDrivers::mysql }).unwrap();
            assert_eq!(rendered.trim(), "engine = \"mysql\"");
        }

        #[test]
        fn test_database_drivers_ordering() {
            assert!(DatabaseDrivers::mysql < DatabaseDrivers::pgsql);
        }
    }

    mod connection_settings_tests {
        use crate::database::enums::database_drivers::DatabaseDrivers;
        use crate::database::structs::connection_settings::ConnectionSettings;

        fn settings(engine: DatabaseDrivers) -> ConnectionSettings {
            ConnectionSettings {
                name: "db1".to_string(),
                engine,
                user: "u".to_string(),
                pass: "s3cr3t".to_string(),
                host: "h".to_string(),
                port: 3306,
                database: "d".to_string(),
            }
        }

        #[test]
        fn test_dsn() {
            assert_eq!(settings(DatabaseDrivers::mysql).dsn(), "u:s3cr3t@h:3306/d");
        }

        #[test]
        fn test_dsn_redacted_hides_password() {
            let redacted = settings(DatabaseDrivers::mysql).dsn_redacted();
            assert_eq!(redacted, "u:***@h:3306/d");
            assert!(!redacted.contains("s3cr3t"));
        }

        #[test]
        fn test_debug_hides_password() {
            let debug_str = format!("{:?}", settings(DatabaseDrivers::mysql));
            assert!(debug_str.contains("ConnectionSettings"));
            assert!(debug_str.contains("db1"));
            assert!(!debug_str.contains("s3cr3t"));
        }
    }
    mod database_client_tests {
        use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
        use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
        use crate::database::enums::database_drivers::DatabaseDrivers;
        use crate::database::structs::database_client::DatabaseClient;
        use crate::database::structs::database_connector::DatabaseConnector;
        use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
        use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
        use crate::database::traits::database_opener::DatabaseOpener;

        // Lazy pools never dial out, so no server is needed.
        fn lazy_mysql() -> DatabaseConnector {
            let pool = MySqlPoolOptions::new().connect_lazy_with(MySqlConnectOptions::new().host("127.0.0.1").port(3306));
            DatabaseConnector { mysql: Some(DatabaseConnectorMySQL { pool }), pgsql: None, engine: DatabaseDrivers::mysql }
        }

        fn lazy_pgsql() -> DatabaseConnector {
            let pool = PgPoolOptions::new().connect_lazy_with(PgConnectOptions::new().host("127.0.0.1").port(5432));
            DatabaseConnector { mysql: None, pgsql: Some(DatabaseConnectorPgSQL { pool }), engine: DatabaseDrivers::pgsql }
        }

        #[tokio::test]
        async fn test_close_mysql_connector() {
            let connector = lazy_mysql();
            assert_eq!(connector.engine(), DatabaseDrivers::mysql);
            assert!(connector.mysql().is_some());
            assert!(connector.pgsql().is_none());
            assert!(!connector.is_closed());

            DatabaseClient.close("db1", &connector).await;
            assert!(connector.is_closed());
            assert!(connector.mysql().is_some_and(|pool| pool.is_closed()));
        }

        #[tokio::test]
        async fn test_close_pgsql_connector() {
            let connector = lazy_pgsql();
            assert_eq!(connector.engine(), DatabaseDrivers::pgsql);
            assert!(connector.pgsql().is_some());
            assert!(connector.mysql().is_none());
            assert!(!connector.is_closed());

            DatabaseClient.close("db2", &connector).await;
            assert!(connector.is_closed());
        }

        #[tokio::test]
        async fn test_close_twice_is_harmless() {
            let connector = lazy_mysql();
            DatabaseClient.close("db1", &connector).await;
            DatabaseClient.close("db1", &connector).await;
            assert!(connector.is_closed());
        }

        #[test]
        fn test_connector_without_pool_reports_closed() {
            let connector = DatabaseConnector { mysql: None, pgsql: None, engine: DatabaseDrivers::pgsql };
            assert!(connector.is_closed());
        }
    }
}
