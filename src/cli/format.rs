//! Format output dispatch helpers

/// Macro for format dispatch that automatically wraps result handling.
/// Use when the json branch returns Result and the human branch returns ().
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => {
///         println!("{}", serde_json::to_string_pretty(&report)?);
///         Ok(())
///     },
///     human => { println!("Done"); }
/// )?;
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
        }
    };
}
