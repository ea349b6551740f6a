use medroute_core::error::Result;
use medroute_core::graph::Location;
use medroute_core::{bail_invalid, bail_usage};

/// Flatten service arguments, accepting both `ICU Laboratory` and
/// `ICU,Laboratory`.
pub fn parse_services(args: &[String]) -> Result<Vec<Location>> {
    let services: Vec<Location> = args
        .iter()
        .flat_map(|arg| arg.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Location::from)
        .collect();

    if services.is_empty() {
        bail_usage!("no services requested");
    }
    Ok(services)
}

/// Trim a location argument, rejecting blank names
pub fn parse_location(arg: &str) -> Result<Location> {
    let name = arg.trim();
    if name.is_empty() {
        bail_invalid!("location", format!("{:?}", arg));
    }
    Ok(Location::from(name))
}
