//! Command line lookup example
//!
//! Demonstrates every client operation against the live service.
//!
//! Run with:
//!
//! ```text
//! KENALL_AUTHORIZATION_TOKEN=... cargo run --example lookup -- address 1008105
//! KENALL_AUTHORIZATION_TOKEN=... cargo run --example lookup -- holidays 2022
//! RUST_LOG=kenall=debug cargo run --example lookup -- whoami
//! ```

use std::time::Duration;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use kenall::{HolidayFilter, KenallClient, RequestContext};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: lookup <command> [args]

commands:
  address <postal code>          addresses of a 7 digit postal code
  city <prefecture code>         cities of a 2 digit prefecture code
  corporation <number>           corporation by 13 digit corporate number
  whoami                         caller IP as seen by the service
  holidays [year | from to]      public holidays, optionally filtered
  normalize <address text>       split free text into address components
  businessday <YYYY-MM-DD>       whether a date is a legal holiday";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        println!("{USAGE}");
        return Ok(());
    };

    let client = KenallClient::from_env().context("KENALL_AUTHORIZATION_TOKEN must be set")?;
    let ctx = RequestContext::with_timeout(Duration::from_secs(10));

    match (command.as_str(), rest) {
        ("address", [code]) => {
            let res = client.get_address(&ctx, code).await?;
            println!("version {}", res.version);
            for addr in &res.addresses {
                println!("{} {} {}{}", addr.jisx0402, addr.prefecture, addr.city, addr.town);
            }
        }
        ("city", [code]) => {
            let res = client.get_city(&ctx, code).await?;
            for city in &res.cities {
                println!("{} {} {}", city.jisx0402, city.prefecture, city.city);
            }
        }
        ("corporation", [number]) => {
            let corp = client.get_corporation(&ctx, number).await?.corporation;
            println!("{} ({})", corp.name, corp.corporate_number);
            println!(
                "{}{}{}",
                corp.prefecture_name, corp.city_name, corp.street_number
            );
            if corp.is_closed() {
                println!("closed {}", corp.close_date);
            }
        }
        ("whoami", []) => {
            let res = client.get_whoami(&ctx).await?;
            println!("{}", res.remote_address);
        }
        ("holidays", args) => {
            let filter = match args {
                [] => HolidayFilter::All,
                [year] => HolidayFilter::year(year.parse().context("year must be a number")?),
                [from, to] => HolidayFilter::period(parse_date(from)?, parse_date(to)?),
                _ => bail!("{USAGE}"),
            };
            let res = client.get_holidays_filtered(&ctx, filter).await?;
            for holiday in &res.holidays {
                println!("{} {}", holiday.date, holiday.title);
            }
        }
        ("normalize", words) if !words.is_empty() => {
            let res = client.normalize_address(&ctx, &words.join(" ")).await?;
            let q = &res.query;
            println!("prefecture  {}", q.prefecture);
            println!("city        {}", q.city);
            println!("town        {}", q.town);
            println!("block/lot   {}", q.block_lot_num);
            println!("building    {}", q.building);
            println!("floor/room  {}", q.floor_room);
        }
        ("businessday", [date]) => {
            let day = client.check_business_day(&ctx, parse_date(date)?).await?.business_day;
            let kind = if day.legal_holiday { "legal holiday" } else { "business day" };
            println!("{} is a {kind}", day.date);
        }
        _ => bail!("{USAGE}"),
    }

    Ok(())
}

fn parse_date(text: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").with_context(|| format!("invalid date: {text}"))
}
