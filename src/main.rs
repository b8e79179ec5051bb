use anyhow::Context;
use clap::{Parser, Subcommand};

use tonal::export::{self, Format, Sheet};
use tonal::palette::{Options, Theme};
use tonal::{config, contrast, palette};

#[derive(Debug, Parser)]
#[command(name = "tonal", version, about = "Light & dark color palette generator")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate the 10-step ramp for a base color.
    Palette {
        /// Base color (hex or CSS name). Defaults to the configured one.
        color: Option<String>,
        #[arg(long, value_enum, default_value_t = Theme::Default)]
        theme: Theme,
        /// Blend background for the dark theme.
        #[arg(long)]
        background: Option<String>,
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
    /// Light and dark ramps side by side, plus the palette key.
    Sheet {
        color: Option<String>,
        #[arg(long)]
        bg_light: Option<String>,
        #[arg(long)]
        bg_dark: Option<String>,
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
    /// Pick the white or black overlay color for a background.
    Contrast { color: String },

    /// Manage stored defaults.
    Config {
        #[command(subcommand)]
        cmd: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Print the resolved config.
    Show,
    /// Update stored defaults (validated before writing).
    Set {
        #[arg(long)]
        base_color: Option<String>,
        #[arg(long)]
        background_light: Option<String>,
        #[arg(long)]
        background_dark: Option<String>,
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
    /// Print the config file path.
    Path,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;

    match cli.command.unwrap_or(Command::Sheet {
        color: None,
        bg_light: None,
        bg_dark: None,
        format: None,
    }) {
        Command::Palette {
            color,
            theme,
            background,
            format,
        } => {
            let color = color.unwrap_or_else(|| cfg.defaults.base_color.clone());
            let background = match theme {
                Theme::Dark => {
                    Some(background.unwrap_or_else(|| cfg.defaults.background_dark.clone()))
                }
                Theme::Default => background,
            };
            tracing::debug!(%color, ?theme, ?background, "generating palette");
            let palette = palette::generate(
                &color,
                &Options {
                    theme,
                    background_color: background,
                },
            )?;
            let format = format.unwrap_or(cfg.output.format);
            println!("{}", export::render(&palette, format)?);
        }
        Command::Sheet {
            color,
            bg_light,
            bg_dark,
            format,
        } => {
            let color = color.unwrap_or_else(|| cfg.defaults.base_color.clone());
            let bg_light = bg_light.unwrap_or_else(|| cfg.defaults.background_light.clone());
            let bg_dark = bg_dark.unwrap_or_else(|| cfg.defaults.background_dark.clone());
            tracing::debug!(%color, %bg_light, %bg_dark, "generating sheet");
            let sheet = export::sheet(&color, &bg_light, &bg_dark)?;
            print_sheet(&sheet, format.unwrap_or(cfg.output.format))?;
        }
        Command::Contrast { color } => {
            println!("{}", contrast::contrast_color(&color)?);
        }
        Command::Config { cmd } => match cmd {
            ConfigCommand::Show => {
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
            ConfigCommand::Set {
                base_color,
                background_light,
                background_dark,
                format,
            } => {
                let mut cfg = cfg;
                if let Some(c) = base_color {
                    tonal::color::parse(&c).context("validate base color")?;
                    cfg.defaults.base_color = c;
                }
                if let Some(c) = background_light {
                    tonal::color::parse(&c).context("validate light background")?;
                    cfg.defaults.background_light = c;
                }
                if let Some(c) = background_dark {
                    tonal::color::parse(&c).context("validate dark background")?;
                    cfg.defaults.background_dark = c;
                }
                if let Some(f) = format {
                    cfg.output.format = f;
                }
                config::save(&cfg, cli.config.as_deref()).context("save config")?;
                println!("Updated config defaults.");
            }
            ConfigCommand::Path => {
                let path = match cli.config {
                    Some(p) => p,
                    None => config::default_config_path().context("default config path")?,
                };
                println!("{}", path.display());
            }
        },
    }

    Ok(())
}

fn print_sheet(sheet: &Sheet, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(sheet).context("serialize sheet")?
            );
        }
        Format::Lines | Format::Map => {
            println!("{}", sheet.key);
            println!("light:");
            println!("{}", indent(&export::render(&sheet.light, format)?));
            println!("dark:");
            println!("{}", indent(&export::render(&sheet.dark, format)?));
        }
    }
    Ok(())
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|l| format!("  {l}"))
        .collect::<Vec<_>>()
        .join("\n")
}
