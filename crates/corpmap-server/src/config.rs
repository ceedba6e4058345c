//! Server settings, from command-line flags or the environment.

use clap::builder::BoolishValueParser;
use clap::Parser;
use corpmap_core::config::{PathsConfig, ServerConfig};
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "corpmap-server")]
#[command(about = "Serve the company directory over HTTP")]
pub struct ServerArgs {
    /// Address to bind to
    #[arg(long, env = "HOST", default_value = ServerConfig::DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, env = "PORT", default_value_t = ServerConfig::DEFAULT_PORT)]
    pub port: u16,

    /// Enable debug logging and detailed error responses
    #[arg(short, long, env = "DEBUG", value_parser = BoolishValueParser::new())]
    pub debug: bool,

    /// Current-schema companies file, read on every request
    #[arg(long, env = "COMPANIES_FILE", default_value = PathsConfig::COMPANIES_FILE)]
    pub data_file: PathBuf,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR", default_value = PathsConfig::STATIC_DIR)]
    pub static_dir: PathBuf,
}

impl ServerArgs {
    /// Settings for a server on `127.0.0.1` with an auto-assigned port.
    pub fn local(data_file: impl Into<PathBuf>) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            debug: false,
            data_file: data_file.into(),
            static_dir: PathBuf::from(PathsConfig::STATIC_DIR),
        }
    }

    /// Resolve `host:port` into the addresses to bind.
    ///
    /// `host` may be an IPv4 or IPv6 literal or a hostname.
    pub fn bind_addrs(&self) -> corpmap_core::Result<Vec<SocketAddr>> {
        let config_error = |detail: String| corpmap_core::CorpmapError::Config {
            message: format!("invalid bind address {} port {}: {}", self.host, self.port, detail),
        };
        let addrs: Vec<SocketAddr> = (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| config_error(e.to_string()))?
            .collect();
        if addrs.is_empty() {
            return Err(config_error("host resolved to no addresses".to_string()));
        }
        Ok(addrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_defaults() {
        let args = ServerArgs::try_parse_from(["corpmap-server"]).unwrap();
        assert_eq!(args.data_file, PathBuf::from("static/companies.json"));
        assert_eq!(args.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = ServerArgs::try_parse_from([
            "corpmap-server",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--debug",
            "--data-file",
            "/srv/companies.json",
        ])
        .unwrap();
        assert_eq!(args.bind_addrs().unwrap(), vec!["127.0.0.1:8080".parse().unwrap()]);
        assert!(args.debug);
        assert_eq!(args.data_file, PathBuf::from("/srv/companies.json"));
    }

    #[test]
    fn test_invalid_host_is_a_config_error() {
        let mut args = ServerArgs::local("companies.json");
        args.host = "not a host".to_string();
        assert!(matches!(
            args.bind_addrs(),
            Err(corpmap_core::CorpmapError::Config { .. })
        ));
    }

    #[test]
    fn test_ipv6_host_binds_unspecified() {
        let mut args = ServerArgs::local("companies.json");
        args.host = "::".to_string();
        args.port = 5000;
        assert_eq!(args.bind_addrs().unwrap(), vec!["[::]:5000".parse().unwrap()]);
    }

    #[test]
    fn test_hostname_is_resolved() {
        let mut args = ServerArgs::local("companies.json");
        args.host = "localhost".to_string();
        args.port = 5000;
        let addrs = args.bind_addrs().unwrap();
        assert!(!addrs.is_empty());
        assert!(addrs.iter().all(|addr| addr.ip().is_loopback() && addr.port() == 5000));
    }

    #[test]
    fn test_environment_supplies_settings() {
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "8081");
        std::env::set_var("DEBUG", "1");
        let enabled = ServerArgs::try_parse_from(["corpmap-server"]);
        std::env::set_var("DEBUG", "false");
        let disabled = ServerArgs::try_parse_from(["corpmap-server"]);
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("DEBUG");

        let enabled = enabled.unwrap();
        assert_eq!(enabled.host, "127.0.0.1");
        assert_eq!(enabled.port, 8081);
        assert!(enabled.debug);
        assert!(!disabled.unwrap().debug);
    }
}
