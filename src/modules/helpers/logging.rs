use fern::Dispatch;

use crate::modules::helpers::config::Settings;

pub fn setup_logging(settings: &Settings) -> Result<(), fern::InitError> {
    let base_config = Dispatch::new().level(settings.logging_level);

    let file_logger_config = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .chain(fern::log_file(&settings.log_file)?);

    base_config
        .chain(file_logger_config)
        .apply()?;

    Ok(())
}
