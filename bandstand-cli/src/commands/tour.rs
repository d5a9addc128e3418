//! The tour schedule listing.

use anyhow::Result;
use bandstand_core::tour;

use crate::render::Render;

pub fn run(json: bool) -> Result<()> {
    let dates = tour::dates();

    if json {
        println!("{}", serde_json::to_string_pretty(&dates)?);
        return Ok(());
    }

    for stop in &dates {
        println!("{}", stop.render());
    }
    Ok(())
}
