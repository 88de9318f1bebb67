use std::io::{self, BufRead, Write};

use tabled::Table;

use crate::{
    cli::{prompt::Prompter, session::finish},
    config::Config,
    info,
    management::{FloodError, FloodRegistry, WATER_LEVELS},
    success,
    types::{FloodReport, FloodTableRow},
    warning,
};

const MENU: &str = "What do you want to do?\n\
<I> - Insert a flood report\n\
<P> - Search a neighborhood for floods\n\
<E> - Delete a flood report\n\
<L> - List flood reports\n\
<S> - Leave the system";

/// Opens the flood registry menu on stdin/stdout.
pub async fn floods(config: &Config) {
    let registry = FloodRegistry::open(&config.floods_path);
    let mut prompt = Prompter::stdio();
    finish(floods_menu(&mut prompt, &registry).await);
}

/// The flood registry menu. Options are case-insensitive.
pub async fn floods_menu<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    registry: &FloodRegistry,
) -> io::Result<()> {
    loop {
        let option = prompt.text(MENU)?.to_uppercase();
        match option.as_str() {
            "I" => insert(prompt, registry).await?,
            "P" => {
                let neighborhood = prompt.required("Neighborhood to search for floods:")?;
                match registry.find(&neighborhood).await {
                    Some(report) => print_report(prompt, &neighborhood, &report)?,
                    None => info!("No flood reported in {}.", neighborhood),
                }
            }
            "E" => {
                let neighborhood = prompt.required("Neighborhood whose report should be deleted:")?;
                match registry.remove(&neighborhood).await {
                    Ok(_) => success!("Flood report of {} deleted.", neighborhood),
                    Err(FloodError::NotFound(_)) => {
                        warning!("No flood reported in {}.", neighborhood)
                    }
                    Err(e) => warning!("Cannot delete flood report. Err: {}", e),
                }
            }
            "L" => {
                let reports = registry.list().await;
                if reports.is_empty() {
                    info!("No floods reported yet.");
                } else {
                    let rows: Vec<FloodTableRow> = reports.into_iter().map(Into::into).collect();
                    println!("{}", Table::new(rows));
                }
            }
            "S" => {
                info!("Closing the flood registry. Thank you for your help!");
                return Ok(());
            }
            _ => warning!("Invalid option. Try again."),
        }
    }
}

async fn insert<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    registry: &FloodRegistry,
) -> io::Result<()> {
    let neighborhood = prompt.required("Neighborhood where the flood is:")?;
    if registry.is_reported(&neighborhood).await {
        info!("This flood was already reported. Thank you for your contribution!");
        return Ok(());
    }

    let water_level = prompt.number_in(
        "From 1 to 5, what is the water level?",
        WATER_LEVELS,
        "Enter a level between 1 and 5.",
    )?;
    let blocked_roads = prompt.required("Which streets and avenues are affected?")?;
    let power_outage = prompt.required("Is there a power outage?")?;
    let water_outage = prompt.required("Is there a water outage?")?;
    let notes = prompt.text("Anything else? (fallen poles, trees, landslides)")?;

    let report = FloodReport {
        water_level,
        blocked_roads,
        power_outage,
        water_outage,
        notes,
    };
    match registry.report(&neighborhood, report).await {
        Ok(()) => success!("Flood in {} reported.", neighborhood),
        Err(FloodError::AlreadyReported(_)) => {
            info!("This flood was already reported. Thank you for your contribution!")
        }
        Err(e) => warning!("Cannot save flood report. Err: {}", e),
    }
    Ok(())
}

fn print_report<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    neighborhood: &str,
    report: &FloodReport,
) -> io::Result<()> {
    prompt.line(&format!("\nNeighborhood: {}", neighborhood))?;
    prompt.line(&format!("Water level: {}", report.water_level))?;
    prompt.line(&format!("Blocked roads: {}", report.blocked_roads))?;
    prompt.line(&format!("Power outage: {}", report.power_outage))?;
    prompt.line(&format!("Water outage: {}", report.water_outage))?;
    prompt.line(&format!("Notes: {}", report.notes))
}
