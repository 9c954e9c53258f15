// ============================================================================
// Area Commands - raw caller input, validated by the command handler
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct CreateArea {
    pub name: String,
    /// `seeding` or `growing`
    pub area_type: String,
    pub reservoir_id: String,
    pub size: String,
    pub size_unit: String,
    /// `indoor` or `outdoor`
    pub location: String,
}

/// Photo file received alongside a `CreateArea`
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}
