use std::process::ExitCode;
use webfilter_domain::DomainError;

use crate::di::UseCases;

pub async fn remove(use_cases: &UseCases, id: i64) -> anyhow::Result<ExitCode> {
    match use_cases.delete_filter.execute(id).await {
        Ok(()) => {
            println!("Removed filter {}", id);
            Ok(ExitCode::SUCCESS)
        }
        Err(DomainError::FilterNotFound(id)) => {
            eprintln!("No filter with id {}", id);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
