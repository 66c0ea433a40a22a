use std::process::ExitCode;

use crate::di::UseCases;

pub fn list(use_cases: &UseCases) -> anyhow::Result<ExitCode> {
    let filters = use_cases.get_filters.execute();

    if filters.is_empty() {
        println!("No filters stored");
        return Ok(ExitCode::SUCCESS);
    }

    for filter in filters {
        println!("{:>4}  {}", filter.id.unwrap_or_default(), filter.text);
    }

    Ok(ExitCode::SUCCESS)
}
