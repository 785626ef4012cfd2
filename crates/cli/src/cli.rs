use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use stockroom_core::ProductId;
use stockroom_inventory::{Location, parse_delta, parse_quantity, parse_stock_level};

/// Two-location inventory tracker (warehouse and shop).
#[derive(Parser, Debug)]
#[command(name = "stockroom", about = "Track product stock across the warehouse and the shop")]
pub struct Cli {
    /// Product file (default: $STOCKROOM_DATA, then the platform data dir).
    #[arg(long = "data", global = true)]
    pub data: Option<PathBuf>,

    /// Output format.
    #[arg(long = "output", short = 'o', global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add stock for a product, creating it if the name is new.
    Add {
        /// Product name (matched case-insensitively).
        name: String,
        /// Where the stock goes.
        #[arg(long, short = 'l', default_value = "warehouse")]
        location: Location,
        /// Number of units (positive integer).
        #[arg(long, short = 'q', value_parser = parse_quantity)]
        quantity: u64,
    },

    /// Change one location's quantity by a signed amount.
    Adjust {
        id: ProductId,
        location: Location,
        /// Signed change, e.g. 1 or -1.
        #[arg(allow_hyphen_values = true, value_parser = parse_delta)]
        delta: i64,
    },

    /// Move one unit between locations.
    Transfer {
        id: ProductId,
        #[arg(long)]
        from: Location,
        /// Defaults to the other location.
        #[arg(long)]
        to: Option<Location>,
    },

    /// Overwrite a product's name, code or quantities.
    Edit {
        id: ProductId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        code: Option<String>,
        #[arg(long, value_parser = parse_stock_level)]
        warehouse: Option<u64>,
        #[arg(long, value_parser = parse_stock_level)]
        shop: Option<u64>,
    },

    /// Delete a product.
    Remove { id: ProductId },

    /// List products, optionally filtered by a name substring.
    List { term: Option<String> },

    /// Show a single product.
    Show { id: ProductId },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("stockroom").chain(args.iter().copied()))
    }

    #[test]
    fn parses_add_with_defaults() {
        let cli = parse(&["add", "Bolt", "-q", "50"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Table);
        assert_eq!(
            cli.command,
            Command::Add {
                name: "Bolt".into(),
                location: Location::Warehouse,
                quantity: 50,
            }
        );
    }

    #[test]
    fn rejects_zero_or_garbage_quantity() {
        assert!(parse(&["add", "Bolt", "-q", "0"]).is_err());
        assert!(parse(&["add", "Bolt", "-q", "lots"]).is_err());
        assert!(parse(&["add", "Bolt", "-l", "garage", "-q", "1"]).is_err());
    }

    #[test]
    fn adjust_accepts_negative_delta() {
        let cli = parse(&["adjust", "17", "shop", "-1"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Adjust {
                id: ProductId::from_raw(17),
                location: Location::Shop,
                delta: -1,
            }
        );
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = parse(&["list", "bol", "--output", "json", "--data", "/tmp/p.json"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/p.json")));
        assert_eq!(cli.command, Command::List { term: Some("bol".into()) });
    }

    #[test]
    fn edit_rejects_negative_stock_levels() {
        assert!(parse(&["edit", "1", "--warehouse", "-4"]).is_err());
        let cli = parse(&["edit", "1", "--shop", "0"]).unwrap();
        assert!(matches!(cli.command, Command::Edit { shop: Some(0), .. }));
    }
}
