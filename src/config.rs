use anyhow::{anyhow, Context};
use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "lem-in",
    about = "Moves an ant colony from ##start to ##end in as few steps as possible.",
    version = "1.0"
)]
pub struct Cli {
    #[arg(help = "Path to the colony description")]
    pub colony: Option<String>,

    #[arg(
        long,
        help = "Path to the colony description; the input is echoed before the moves",
        conflicts_with = "colony"
    )]
    pub file: Option<String>,

    #[arg(long, help = "Path to a YAML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Path to write solve statistics as JSON")]
    pub stats_path: Option<String>,

    #[arg(long, help = "Log filter, e.g. `debug` or `lemin_rust=trace`")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub colony_path: String,
    pub show_content: bool,
    pub stats_path: Option<String>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            colony_path: String::new(),
            show_content: false,
            stats_path: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Reads the YAML file named by `--config`, if any, then applies the
    /// command line on top.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let config = if let Some(config_file) = cli.config.as_ref() {
            let config_str = std::fs::read_to_string(config_file)
                .with_context(|| format!("error with config file: {config_file}"))?;
            Config::from_yaml_str(&config_str)
                .with_context(|| format!("error with config file: {config_file}"))?
        } else {
            Config::default()
        };
        config.override_from_command_line(cli)
    }

    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn override_from_command_line(mut self, cli: &Cli) -> anyhow::Result<Self> {
        if let Some(path) = &cli.file {
            self.colony_path = path.clone();
            self.show_content = true;
        } else if let Some(path) = &cli.colony {
            self.colony_path = path.clone();
        }
        if let Some(path) = &cli.stats_path {
            self.stats_path = Some(path.clone());
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.colony_path.is_empty() {
            return Err(anyhow!(
                "Program takes a colony file, either as argument or with --file"
            ));
        }
        self.env_filter()
            .with_context(|| format!("invalid log level: {}", self.log_level))?;
        Ok(())
    }

    pub fn env_filter(&self) -> anyhow::Result<EnvFilter> {
        Ok(EnvFilter::try_new(&self.log_level)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_defaults() {
        let config = Config::from_yaml_str("colony_path: maps/subject.txt\n").unwrap();
        assert_eq!(config.colony_path, "maps/subject.txt");
        assert!(!config.show_content);
        assert_eq!(config.stats_path, None);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_yaml_file() {
        let config_str = std::fs::read_to_string("maps/lemin.yaml").unwrap();
        let config = Config::from_yaml_str(&config_str).unwrap();
        assert_eq!(config.colony_path, "maps/trap.txt");
        assert!(config.show_content);
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_command_line_overrides_yaml() {
        let config = Config::from_yaml_str(
            "colony_path: from_yaml.txt\nstats_path: stats.json\nlog_level: info\n",
        )
        .unwrap();
        let cli = Cli::parse_from(["lem-in", "--file", "from_cli.txt", "--log-level", "debug"]);
        let config = config.override_from_command_line(&cli).unwrap();
        assert_eq!(config.colony_path, "from_cli.txt");
        assert!(config.show_content);
        assert_eq!(config.stats_path.as_deref(), Some("stats.json"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_positional_colony() {
        let cli = Cli::parse_from(["lem-in", "colony.txt"]);
        let config = Config::default().override_from_command_line(&cli).unwrap();
        assert_eq!(config.colony_path, "colony.txt");
        assert!(!config.show_content);
    }

    #[test]
    fn test_load() {
        let cli = Cli::parse_from(["lem-in", "--config", "maps/lemin.yaml", "maps/subject.txt"]);
        let config = Config::load(&cli).unwrap();
        assert_eq!(config.colony_path, "maps/subject.txt");
        assert_eq!(config.log_level, "info");

        let cli = Cli::parse_from(["lem-in", "--config", "maps/missing.yaml", "a.txt"]);
        let err = Config::load(&cli).unwrap_err();
        assert!(format!("{err:#}").starts_with("error with config file: maps/missing.yaml: "));

        let cli = Cli::parse_from(["lem-in"]);
        let err = Config::load(&cli).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "Program takes a colony file, either as argument or with --file"
        );
    }

    #[test]
    fn test_validation() {
        let cli = Cli::parse_from(["lem-in"]);
        assert!(Config::default().override_from_command_line(&cli).is_err());

        assert!(Cli::try_parse_from(["lem-in", "a.txt", "--file", "b.txt"]).is_err());

        let config = Config {
            colony_path: "a.txt".to_string(),
            log_level: "lemin_rust=loud".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
