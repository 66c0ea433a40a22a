use std::process::ExitCode;
use webfilter_domain::DomainError;

use crate::di::UseCases;

pub async fn add(use_cases: &UseCases, word: &str) -> anyhow::Result<ExitCode> {
    match use_cases.add_filter.execute(word).await {
        Ok(filter) => {
            println!(
                "Added filter {} '{}'",
                filter.id.unwrap_or_default(),
                filter.text
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(DomainError::InvalidFilter(reason)) => {
            eprintln!("Filter was not added: {}", reason);
            Ok(ExitCode::FAILURE)
        }
        Err(DomainError::DuplicateFilter(text)) => {
            eprintln!(
                "Filter '{}' already exists, please enter a unique filter",
                text
            );
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
