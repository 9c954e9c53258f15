// ============================================================================
// Reservoir Commands - raw caller input, validated by the command handler
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct CreateReservoir {
    pub name: String,
    /// `bucket` or `tap`
    pub water_source_type: String,
    /// Only read for buckets
    pub capacity: String,
}
