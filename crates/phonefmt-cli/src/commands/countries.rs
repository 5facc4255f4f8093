use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct CountriesArgs {}

#[derive(Debug, Serialize)]
struct CountryDto {
    country: String,
    dial_code: String,
    pattern: String,
    replacement: Option<String>,
}

pub fn list_countries(ctx: &Context<'_>, _args: CountriesArgs) -> Result<()> {
    let items: Vec<CountryDto> = ctx
        .config
        .rules
        .iter()
        .map(|(country, rule)| CountryDto {
            country: country.to_string(),
            dial_code: rule.dial_code().to_string(),
            pattern: rule.validation_pattern().as_str().to_string(),
            replacement: rule.display_replacement().map(str::to_string),
        })
        .collect();

    if ctx.json {
        print_json(&items)?;
        return Ok(());
    }

    if items.is_empty() {
        println!("no countries");
        return Ok(());
    }

    for item in items {
        match item.replacement {
            Some(_) => println!("{} +{} (reformats)", item.country, item.dial_code),
            None => println!("{} +{}", item.country, item.dial_code),
        }
    }
    Ok(())
}
