//! Plain-text rendering of nations and rankings.

use nationsim_core::NationRecord;

/// Compact display of large counts: billions, millions, or grouped
/// digits below that.
pub fn format_compact(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.2} B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.2} M", value / 1e6)
    } else {
        group_thousands(value.round() as u64)
    }
}

fn group_thousands(mut value: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let group = value % 1000;
        value /= 1000;
        if value == 0 {
            groups.push(group.to_string());
            break;
        }
        groups.push(format!("{group:03}"));
    }
    groups.reverse();
    groups.join(",")
}

/// The ranking table, best HDI first.
pub fn ranking_table(nations: &[NationRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>4}  {:<24} {:<14} {:<18} {:>6} {:>12}  {}\n",
        "#", "Nation", "Government", "Capital", "HDI", "Population", "Owner"
    ));
    for (index, nation) in nations.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:<24} {:<14} {:<18} {:>6.3} {:>12}  {}\n",
            index + 1,
            nation.name,
            nation.government,
            nation.capital,
            nation.stats.hdi,
            format_compact(nation.stats.population as f64),
            nation.owner.as_deref().unwrap_or("-"),
        ));
    }
    if nations.is_empty() {
        out.push_str("No nations in the global registry.\n");
    }
    out
}

/// One nation's panel.
pub fn nation_panel(nation: &NationRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", nation.name, nation.id));
    out.push_str(&format!("  Capital:     {}\n", nation.capital));
    out.push_str(&format!("  Government:  {}\n", nation.government));
    if let Some(motto) = &nation.motto {
        out.push_str(&format!("  Motto:       {motto}\n"));
    }
    if let Some(owner) = &nation.owner {
        out.push_str(&format!("  Owner:       {owner}\n"));
    }
    if let Some(founded) = &nation.founded {
        out.push_str(&format!("  Founded:     {}\n", founded.to_rfc3339()));
    }
    out.push_str(&format!(
        "  Population:  {}\n",
        format_compact(nation.stats.population as f64)
    ));
    out.push_str(&format!("  GDP:         U$ {}\n", format_compact(nation.stats.gdp)));
    out.push_str(&format!("  HDI:         {:.3}\n", nation.stats.hdi));
    out
}
