//! Command handlers.
//!
//! Each command is written once against `ResourceController<T>` and
//! dispatched to the typed controller of the named resource.

use super::commands::{Commands, OutputFormat};
use super::output::{human_line, summary_lines, to_json};
use satudata::{
    Confirmation, LifecycleStatus, Portal, PortalResource, Resource, ResourceController,
    SatuDataResult,
};
use serde::Serialize;
use tracing::{debug, info};

/// Run a command against the portal.
pub async fn handle_command(portal: &Portal, command: Commands) -> SatuDataResult<()> {
    match command.resource() {
        PortalResource::Opd => execute(portal.opd()?, command).await,
        PortalResource::Urusan => execute(portal.urusan()?, command).await,
        PortalResource::Buku => execute(portal.buku()?, command).await,
        PortalResource::AkunKepalaDinas => execute(portal.akun_kepala_dinas()?, command).await,
        PortalResource::TrxSektoral => execute(portal.trx_sektoral()?, command).await,
        PortalResource::Users => execute(portal.users()?, command).await,
    }
}

async fn execute<T>(controller: ResourceController<T>, command: Commands) -> SatuDataResult<()>
where
    T: Resource<Id = i64> + Serialize,
{
    match command {
        Commands::List {
            search,
            filters,
            format,
            ..
        } => list(&controller, search, filters, format).await,
        Commands::Stats { field, .. } => stats(&controller, field).await,
        Commands::Delete { id, yes, .. } => delete(&controller, id, yes).await,
    }
}

async fn load_or_exit<T: Resource>(controller: &ResourceController<T>) {
    if let LifecycleStatus::Failed(reason) = controller.load().await {
        eprintln!(
            "Error: failed to load '{}': {}",
            controller.spec().name(),
            reason
        );
        std::process::exit(1);
    }
}

async fn list<T>(
    controller: &ResourceController<T>,
    search: Option<String>,
    filters: Vec<(String, String)>,
    format: OutputFormat,
) -> SatuDataResult<()>
where
    T: Resource + Serialize,
{
    // Reject unknown filter names before any request.
    for (name, _) in &filters {
        controller.spec().field(name)?;
    }

    load_or_exit(controller).await;

    if let Some(query) = search {
        controller.set_query(query);
    }
    for (name, value) in filters {
        debug!(filter = %name, value = %value, "Applying filter");
        controller.select(name, value);
    }

    let view = controller.view();
    match format {
        OutputFormat::Json => println!("{}", to_json(view.as_slice())?),
        OutputFormat::Human => {
            println!("{} ({}):", controller.spec().name(), controller.status());
            println!("{:-<80}", "");
            for item in view.iter() {
                println!("{}", human_line(item)?);
            }
            println!("{:-<80}", "");
            let lines = summary_lines(
                view.len(),
                controller.raw().len(),
                controller.is_empty_result(),
            );
            for line in lines {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

async fn stats<T: Resource>(
    controller: &ResourceController<T>,
    field: Option<String>,
) -> SatuDataResult<()> {
    let fields: Vec<String> = match field {
        Some(name) => {
            controller.spec().field(&name)?;
            vec![name]
        }
        None => controller
            .spec()
            .filters()
            .iter()
            .map(|f| f.name().to_string())
            .collect(),
    };

    load_or_exit(controller).await;

    println!("{}: {} items", controller.spec().name(), controller.raw().len());
    for name in &fields {
        println!("{}:", name);
        for (value, count) in controller.count_by(name)? {
            println!("  {:<40} {}", value, count);
        }
    }
    if controller.spec().timestamp_field().is_some() {
        println!("Created this year: {}", controller.count_current_year());
    }

    Ok(())
}

async fn delete<T: Resource<Id = i64>>(
    controller: &ResourceController<T>,
    id: i64,
    yes: bool,
) -> SatuDataResult<()> {
    let result = controller.delete(&id, Confirmation::from(yes)).await;

    if !yes {
        println!("{} (pass --yes to confirm)", result.message);
        return Ok(());
    }

    if result.success {
        info!(resource = controller.spec().name(), id, "Deleted");
        println!("{}", result.message);
        Ok(())
    } else {
        eprintln!("Error: {}", result.message);
        std::process::exit(1);
    }
}
