use crate::commands::{print_json, read_values, Context};
use anyhow::Result;
use clap::Args;
use phonefmt_core::{format_national, format_national_any, national_to_epp};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ItuToEppArgs {
    /// Phone numbers, or `-` to read one per line from stdin
    #[arg(required = true)]
    pub values: Vec<String>,
}

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Phone numbers, or `-` to read one per line from stdin
    #[arg(required = true)]
    pub values: Vec<String>,
    /// Candidate country (ISO 3166-1 alpha-2), tried in the order given
    #[arg(long = "country", short = 'c')]
    pub countries: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ToEppArgs {
    /// Phone numbers, or `-` to read one per line from stdin
    #[arg(required = true)]
    pub values: Vec<String>,
    /// Country (ISO 3166-1 alpha-2) the numbers belong to
    #[arg(long, short = 'c')]
    pub country: String,
}

#[derive(Debug, Serialize)]
struct ConversionDto {
    input: String,
    output: String,
}

pub fn itu_to_epp(json: bool, args: ItuToEppArgs) -> Result<()> {
    let values = read_values(args.values)?;
    let mut items = Vec::with_capacity(values.len());
    for input in values {
        let output = phonefmt_core::itu_to_epp(&input)?.into_string();
        debug!(input = %input, output = %output, "itu to epp");
        items.push(ConversionDto { input, output });
    }
    print_conversions(json, &items)
}

pub fn format(ctx: &Context<'_>, args: FormatArgs) -> Result<()> {
    let values = read_values(args.values)?;
    let candidates: Vec<String> = if args.countries.is_empty() {
        ctx.config
            .default_countries
            .iter()
            .map(|code| code.to_string())
            .collect()
    } else {
        args.countries
    };
    debug!(countries = ?candidates, "format candidates");

    let rules = &ctx.config.rules;
    let mut items = Vec::with_capacity(values.len());
    for input in values {
        let output = if candidates.is_empty() {
            format_national_any(&input, rules)?
        } else {
            format_national(&input, &candidates, rules)?
        };
        debug!(input = %input, output = %output, "format national");
        items.push(ConversionDto { input, output });
    }
    print_conversions(ctx.json, &items)
}

pub fn to_epp(ctx: &Context<'_>, args: ToEppArgs) -> Result<()> {
    let values = read_values(args.values)?;
    let rules = &ctx.config.rules;
    let mut items = Vec::with_capacity(values.len());
    for input in values {
        let output = national_to_epp(&input, &args.country, rules)?.into_string();
        debug!(input = %input, country = %args.country, output = %output, "national to epp");
        items.push(ConversionDto { input, output });
    }
    print_conversions(ctx.json, &items)
}

fn print_conversions(json: bool, items: &[ConversionDto]) -> Result<()> {
    if json {
        return print_json(&items);
    }
    for item in items {
        println!("{}", item.output);
    }
    Ok(())
}
