use clap::Parser;
use rental_booking::config::Command;
use rental_booking::domain::model::{Credentials, Registration};
use rental_booking::domain::ports::LocationApi;
use rental_booking::utils::{logger, validation::Validate};
use rental_booking::{
    calculate_days_between, calculate_total_cost_with_tax, format_date, format_date_for_input,
    is_weekend, parse_calendar_date, ApiClient, AuthContext, BookingCalendar, BookingQuoter,
    CliConfig, FileSessionStore, Result, SystemClock, TomlConfig,
};
use serde::Serialize;

fn print_output<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}

/// Returns `false` when the command ran but the booking it checked is not acceptable.
async fn run(cli: &CliConfig, config: &TomlConfig) -> Result<bool> {
    let calendar = BookingCalendar::new(config.policy, SystemClock);

    match &cli.command {
        Command::Validate { start, end } => {
            let result = calendar.validate(start, end);
            print_output(cli.json, &result, || {
                if result.is_valid {
                    format!("✅ Valid booking of {} day(s)", result.duration.unwrap_or_default())
                } else {
                    result
                        .errors
                        .iter()
                        .map(|e| format!("❌ {}", e))
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            })?;
            Ok(result.is_valid)
        }
        Command::Days { start, end } => {
            let days = calculate_days_between(start, end);
            print_output(cli.json, &days, || days.to_string())?;
            Ok(true)
        }
        Command::Format { value } => {
            let formatted = format_date(value.as_deref().map(Into::into));
            print_output(cli.json, &formatted, || formatted.clone())?;
            Ok(true)
        }
        Command::InputDate { value } => {
            let formatted = format_date_for_input(parse_calendar_date(value));
            print_output(cli.json, &formatted, || formatted.clone())?;
            Ok(true)
        }
        Command::Range => {
            let range = serde_json::json!({
                "min": calendar.min_date(),
                "max": calendar.max_date(),
            });
            print_output(cli.json, &range, || {
                format!("{} .. {}", calendar.min_date(), calendar.max_date())
            })?;
            Ok(true)
        }
        Command::Suggest { start } => {
            let end = calendar.suggested_end_date(start);
            print_output(cli.json, &end, || end.clone())?;
            Ok(true)
        }
        Command::Weekend { date } => {
            let weekend = is_weekend(date);
            print_output(cli.json, &weekend, || weekend.to_string())?;
            Ok(true)
        }
        Command::Cost {
            rate,
            days,
            tax_rate,
        } => {
            let cost =
                calculate_total_cost_with_tax(*rate, *days, tax_rate.unwrap_or(config.policy.tax_rate));
            print_output(cli.json, &cost, || {
                format!(
                    "{} day(s): subtotal {:.2}, tax {:.2}, total {:.2}",
                    cost.days, cost.subtotal, cost.tax, cost.total
                )
            })?;
            Ok(true)
        }
        Command::Quote { start, end, rate } => {
            let quote = BookingQuoter::new(calendar).quote(start, end, *rate);
            print_output(cli.json, &quote, || match &quote.cost {
                Some(cost) => format!(
                    "✅ {} day(s) from {}: subtotal {:.2}, tax {:.2}, total {:.2}{}",
                    cost.days,
                    format_date(Some(start.as_str().into())),
                    cost.subtotal,
                    cost.tax,
                    cost.total,
                    if quote.weekend_start { " (weekend pickup)" } else { "" }
                ),
                None => quote
                    .validation
                    .errors
                    .iter()
                    .map(|e| format!("❌ {}", e))
                    .collect::<Vec<_>>()
                    .join("\n"),
            })?;
            Ok(quote.validation.is_valid)
        }
        account_command => run_account_command(cli, config, account_command).await,
    }
}

async fn run_account_command(cli: &CliConfig, config: &TomlConfig, command: &Command) -> Result<bool> {
    let client = ApiClient::new(&config.api.base_url, config.timeout())?;
    let store = FileSessionStore::new(config.session_path());
    tracing::debug!("Using session file {}", store.path().display());
    let mut auth = AuthContext::restore(client, store)?;

    match command {
        Command::Login { email, password } => {
            let credentials = Credentials {
                email: email.clone(),
                password: password.clone(),
            };
            let user = auth.login(&credentials).await?;
            print_output(cli.json, user, || format!("✅ Logged in as {} <{}>", user.name, user.email))?;
        }
        Command::Register {
            name,
            email,
            password,
            phone,
        } => {
            let registration = Registration {
                name: name.clone(),
                email: email.clone(),
                password: password.clone(),
                phone: phone.clone(),
            };
            let user = auth.register(&registration).await?;
            print_output(cli.json, user, || format!("✅ Registered {} <{}>", user.name, user.email))?;
        }
        Command::Logout => {
            auth.logout().await?;
            print_output(cli.json, &true, || "👋 Logged out".to_string())?;
        }
        Command::Profile => match auth.refresh_profile().await? {
            Some(user) => {
                print_output(cli.json, user, || {
                    let phone = user.phone.as_deref().unwrap_or("-");
                    format!("{} <{}> phone: {}", user.name, user.email, phone)
                })?;
            }
            None => {
                eprintln!("❌ Not logged in");
                return Ok(false);
            }
        },
        Command::Locations => {
            let locations = auth.api().locations().await?;
            print_output(cli.json, &locations, || {
                locations
                    .iter()
                    .map(|l| match &l.city {
                        Some(city) => format!("{} ({})", l.name, city),
                        None => l.name.clone(),
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })?;
        }
        other => {
            tracing::error!("Not an account command: {:?}", other);
            return Ok(false);
        }
    }

    Ok(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let mut config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    if let Some(api_url) = &cli.api_url {
        config.api.base_url = api_url.clone();
    }
    tracing::debug!("Config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run(&cli, &config).await {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}
