use crate::cli::common::{self, print_json};
use crate::cli::json_output::{CredentialListItem, ListResponse};
use pinvault::error::Result;

pub fn run(json: bool) -> Result<()> {
    let (_, client) = common::open_client()?;
    let records = client.list();

    if json {
        let credentials = records.iter().map(CredentialListItem::from).collect();
        return print_json(&ListResponse { credentials });
    }

    if records.is_empty() {
        eprintln!("No credentials stored.");
        return Ok(());
    }

    for record in &records {
        println!(
            "{}\t{}\t{}\t{}",
            record.id,
            record.account,
            record.username.as_deref().or(record.email.as_deref()).unwrap_or("-"),
            record.created_at.format("%Y-%m-%d"),
        );
    }
    Ok(())
}
