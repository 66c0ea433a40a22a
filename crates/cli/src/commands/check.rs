use std::process::ExitCode;
use webfilter_application::services::NavigationDecision;
use webfilter_domain::ensure_url_scheme;

use crate::di::UseCases;

/// Mirrors the browser's navigation gate: bare hostnames get a scheme
/// prepended before the match decision, exactly like address-bar input.
pub fn check(use_cases: &UseCases, url: &str) -> anyhow::Result<ExitCode> {
    let url = ensure_url_scheme(url);

    match use_cases.check_url.execute(&url) {
        NavigationDecision::Blocked(filter) => {
            println!("BLOCKED (matched \"{}\")", filter.text);
            Ok(ExitCode::FAILURE)
        }
        NavigationDecision::Allowed => {
            println!("ALLOWED");
            Ok(ExitCode::SUCCESS)
        }
    }
}
