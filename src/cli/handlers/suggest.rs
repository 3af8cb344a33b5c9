use crate::catalog;
use anyhow::Result;

pub fn handle_suggest(query: String, json: bool) -> Result<()> {
    let suggestions = catalog::suggestions(&query);

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else if suggestions.is_empty() {
        println!("No suggestions.");
    } else {
        for name in suggestions {
            println!("{}", name);
        }
    }
    Ok(())
}
