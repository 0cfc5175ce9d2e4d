use credfix::application::fixture_service::FixtureService;
use credfix::domain::ports::config::FixtureConfig;
use credfix::error::AppError;
use credfix::infra::os_random::OsRandomSource;
use credfix::tracing::init_logging;

fn main() -> Result<(), AppError> {
    init_logging();

    let mut service = FixtureService::new(OsRandomSource::new(), FixtureConfig::new());

    let credential = service.generate().inspect_err(|e| {
        tracing::error!("unable to generate fixture: {}", e);
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    service.write_credential(&credential, &mut out)?;

    Ok(())
}
