//! CLI command implementations.
//!
//! `serve` boots the HTTP service; `seed` and `smoke` are thin clients
//! against a running instance. The smoke scenario mirrors the service's
//! acceptance walk: load data, exercise every read path, prove re-adding
//! does not duplicate, update by looked-up id, delete by looked-up id.

use tracing_subscriber::EnvFilter;

use crate::client::{ClientResponse, MountainConnector};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::model::Mountain;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments, initialize logging, and dispatch.
pub fn run() -> CliResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,massif=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse_args();
    let runtime = tokio::runtime::Runtime::new()?;

    match cli.command {
        Command::Serve { host, port } => runtime.block_on(serve(host, port)),
        Command::Seed { url } => runtime.block_on(seed(&url)),
        Command::Smoke { url } => runtime.block_on(smoke(&url)),
    }
}

/// The well-known seven-record sample set.
pub fn sample_mountains() -> Vec<Mountain> {
    vec![
        Mountain::new("YrWyddfa", 1085, "Eryri", "Cymru", true),
        Mountain::new("Snowdon", 1085, "Snowdonia", "Wales", true),
        Mountain::new("Aconcagua", 6961, "Andes", "Argentina", false),
        Mountain::new("Annapurna", 8091, "Himalayas", "Nepal", true),
        Mountain::new("Makalu", 8485, "Himalayas", "Nepal", true),
        Mountain::new("Huascarán", 6768, "Andes", "Peru", false),
        Mountain::new("Antofalla", 6409, "Andes", "Argentina", false),
    ]
}

async fn serve(host: String, port: u16) -> CliResult<()> {
    let config = HttpServerConfig {
        host,
        port,
        ..Default::default()
    };
    let server = HttpServer::with_config(config);
    server.start().await?;
    Ok(())
}

async fn seed(url: &str) -> CliResult<()> {
    let connector = MountainConnector::new(url);
    let response = connector.add_mountains(&sample_mountains()).await?;
    if !response.status.is_success() {
        return Err(CliError::Scenario(format!(
            "seeding answered {}",
            response.status
        )));
    }
    tracing::info!("seeded {} mountains", sample_mountains().len());
    Ok(())
}

/// Compare a response's rendered listing with the expected lines.
fn check(step: &str, response: &ClientResponse, expected: &[&str]) -> CliResult<()> {
    let actual: Vec<String> = response.mountains.iter().map(|m| m.to_string()).collect();
    if actual == expected {
        println!("{step}: success");
        Ok(())
    } else {
        println!("{step}: failure (got {actual:?})");
        Err(CliError::Scenario(step.to_string()))
    }
}

async fn smoke(url: &str) -> CliResult<()> {
    let connector = MountainConnector::new(url);

    // Level 1: load initial data (expects a fresh, empty service)
    let response = connector.add_mountains(&sample_mountains()).await?;
    check("Load initial data", &response, &[])?;
    if !response.status.is_success() {
        return Err(CliError::Scenario(format!(
            "initial load answered {}",
            response.status
        )));
    }

    // Level 2: read paths
    let response = connector.get_all().await?;
    check(
        "Get all mountains",
        &response,
        &[
            "YrWyddfa is in the Eryri range in Cymru. It is in the Northern hemisphere and is 1085m high.",
            "Snowdon is in the Snowdonia range in Wales. It is in the Northern hemisphere and is 1085m high.",
            "Aconcagua is in the Andes range in Argentina. It is in the Southern hemisphere and is 6961m high.",
            "Annapurna is in the Himalayas range in Nepal. It is in the Northern hemisphere and is 8091m high.",
            "Makalu is in the Himalayas range in Nepal. It is in the Northern hemisphere and is 8485m high.",
            "Huascarán is in the Andes range in Peru. It is in the Southern hemisphere and is 6768m high.",
            "Antofalla is in the Andes range in Argentina. It is in the Southern hemisphere and is 6409m high.",
        ],
    )?;

    let response = connector.get_by_country("Argentina").await?;
    check(
        "Get mountains in Argentina",
        &response,
        &[
            "Aconcagua is in the Andes range in Argentina. It is in the Southern hemisphere and is 6961m high.",
            "Antofalla is in the Andes range in Argentina. It is in the Southern hemisphere and is 6409m high.",
        ],
    )?;

    let response = connector.get_by_country_and_range("Nepal", "Himalayas").await?;
    check(
        "Get mountains in Nepal and the Himalayas",
        &response,
        &[
            "Annapurna is in the Himalayas range in Nepal. It is in the Northern hemisphere and is 8091m high.",
            "Makalu is in the Himalayas range in Nepal. It is in the Northern hemisphere and is 8485m high.",
        ],
    )?;

    let response = connector.get_by_hemisphere(true).await?;
    check(
        "Get mountains in the Northern hemisphere",
        &response,
        &[
            "YrWyddfa is in the Eryri range in Cymru. It is in the Northern hemisphere and is 1085m high.",
            "Snowdon is in the Snowdonia range in Wales. It is in the Northern hemisphere and is 1085m high.",
            "Annapurna is in the Himalayas range in Nepal. It is in the Northern hemisphere and is 8091m high.",
            "Makalu is in the Himalayas range in Nepal. It is in the Northern hemisphere and is 8485m high.",
        ],
    )?;

    let response = connector.get_by_hemisphere(false).await?;
    check(
        "Get mountains in the Southern hemisphere",
        &response,
        &[
            "Aconcagua is in the Andes range in Argentina. It is in the Southern hemisphere and is 6961m high.",
            "Huascarán is in the Andes range in Peru. It is in the Southern hemisphere and is 6768m high.",
            "Antofalla is in the Andes range in Argentina. It is in the Southern hemisphere and is 6409m high.",
        ],
    )?;

    let response = connector.get_by_country_altitude("Nepal", 8400).await?;
    check(
        "Get mountains over 8400m in Nepal",
        &response,
        &["Makalu is in the Himalayas range in Nepal. It is in the Northern hemisphere and is 8485m high."],
    )?;

    let response = connector.get_by_name("Cymru", "Eryri", "YrWyddfa").await?;
    check(
        "Get a specific mountain",
        &response,
        &["YrWyddfa is in the Eryri range in Cymru. It is in the Northern hemisphere and is 1085m high."],
    )?;

    let response = connector.get_by_country("lemon").await?;
    check("Simple error test", &response, &[])?;

    // Level 3: add more data, then prove re-adding does not duplicate
    let add_list = vec![
        Mountain::new("PenYFan", 886, "BannauBrycheiniog", "Wales", true),
        Mountain::new("CadairIdris", 893, "Eryri", "Wales", true),
    ];
    let response = connector.add_mountains(&add_list).await?;
    check("Adding new mountains", &response, &[])?;

    let wales_after_adding = [
        "Snowdon is in the Snowdonia range in Wales. It is in the Northern hemisphere and is 1085m high.",
        "PenYFan is in the BannauBrycheiniog range in Wales. It is in the Northern hemisphere and is 886m high.",
        "CadairIdris is in the Eryri range in Wales. It is in the Northern hemisphere and is 893m high.",
    ];
    let response = connector.get_by_country("Wales").await?;
    check("Get all mountains in Wales", &response, &wales_after_adding)?;

    let response = connector.add_mountains(&add_list).await?;
    check("Try adding again", &response, &[])?;
    let response = connector.get_by_country("Wales").await?;
    check("Wales unchanged after re-add", &response, &wales_after_adding)?;

    // Level 4: update Annapurna's range via a lookup of its id
    let annapurna = connector
        .get_by_name("Nepal", "Himalayas", "Annapurna")
        .await?;
    let id = annapurna
        .mountains
        .first()
        .map(|m| m.id)
        .ok_or_else(|| CliError::Scenario("Annapurna lookup".to_string()))?;

    let response = connector.get_by_id(id).await?;
    check(
        "Check get by ID",
        &response,
        &["Annapurna is in the Himalayas range in Nepal. It is in the Northern hemisphere and is 8091m high."],
    )?;

    let update = Mountain::new("Annapurna", 8091, "Annapurna", "Nepal", true);
    let response = connector.update_mountain(id, &update).await?;
    check("Update mountain", &response, &[])?;

    let response = connector.get_by_country("Nepal").await?;
    check(
        "Check mountains in Nepal updated",
        &response,
        &[
            "Annapurna is in the Annapurna range in Nepal. It is in the Northern hemisphere and is 8091m high.",
            "Makalu is in the Himalayas range in Nepal. It is in the Northern hemisphere and is 8485m high.",
        ],
    )?;

    // Level 5: delete Antofalla via a lookup of its id
    let antofalla = connector
        .get_by_name("Argentina", "Andes", "Antofalla")
        .await?;
    let id = antofalla
        .mountains
        .first()
        .map(|m| m.id)
        .ok_or_else(|| CliError::Scenario("Antofalla lookup".to_string()))?;

    let response = connector.delete_mountain(id).await?;
    check("Delete mountain", &response, &[])?;

    let response = connector.get_by_country("Argentina").await?;
    check(
        "Check mountains in Argentina updated",
        &response,
        &["Aconcagua is in the Andes range in Argentina. It is in the Southern hemisphere and is 6961m high."],
    )?;

    println!("smoke scenario passed");
    Ok(())
}
