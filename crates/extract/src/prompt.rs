use crate::schema::SiteRequest;

/// Render one site as the input block the research model expects.
pub fn render_site_block(site: &SiteRequest) -> String {
    format!(
        "Site ID: {}\nSite Name: {}\nLatitude: {}\nLongitude: {}",
        site.site_id, site.site_name, site.latitude, site.longitude
    )
}

/// Append the formatted site blocks to the caller's system prompt.
pub fn build_research_prompt(system_prompt: &str, sites: &[SiteRequest]) -> String {
    let blocks = sites
        .iter()
        .map(render_site_block)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{system_prompt}\n\n{blocks}")
}
