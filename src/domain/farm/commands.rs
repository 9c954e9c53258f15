// ============================================================================
// Farm Commands - raw caller input, validated by the command handler
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct CreateFarm {
    pub name: String,
    pub farm_type: String,
    pub latitude: String,
    pub longitude: String,
    pub country_code: String,
    pub city_code: String,
}
