//! Version comparison between the CLI and the template pack it runs

use semver::Version;

/// Parse a version, tolerating a leading `v`
pub fn parse_version(version: &str) -> Option<Version> {
    let cleaned = version.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).ok()
}

/// Warning text when the pack was written for a newer CLI
///
/// Unparseable versions are not compared and produce no warning.
pub fn check_compatibility(
    cli_version: &str,
    pack_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let cli = parse_version(cli_version)?;
    let pack = parse_version(pack_version)?;

    (cli < pack).then(|| {
        format!(
            "Template pack needs CLI version {} or newer (running {}). Update with: {}",
            pack, cli, upgrade_command
        )
    })
}
