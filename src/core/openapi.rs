use utoipa::{Modify, OpenApi};

use crate::features::address_sessions::{
    dtos as address_sessions_dtos, handlers as address_sessions_handlers,
};
use crate::features::postal_codes::{
    dtos as postal_codes_dtos, handlers as postal_codes_handlers, models as postal_codes_models,
};
use crate::features::regions::{
    dtos as regions_dtos, handlers as regions_handlers, models as regions_models,
    services as regions_services,
};
use crate::shared::source_error::SourceErrorKind;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions
        regions_handlers::list_provinces,
        regions_handlers::list_regencies_by_province,
        regions_handlers::list_districts_by_regency,
        regions_handlers::list_villages_by_district,
        // Postal codes
        postal_codes_handlers::lookup_postal_codes,
        // Address sessions
        address_sessions_handlers::create_session,
        address_sessions_handlers::get_session,
        address_sessions_handlers::select_region,
        address_sessions_handlers::retry_level,
        address_sessions_handlers::delete_session,
    ),
    components(
        schemas(
            // Shared
            Meta,
            SourceErrorKind,
            // Regions
            regions_models::RegionLevel,
            regions_models::HierarchySelection,
            regions_services::LevelStatus,
            regions_dtos::RegionResponseDto,
            ApiResponse<Vec<regions_dtos::RegionResponseDto>>,
            // Postal codes
            postal_codes_models::MatchTier,
            postal_codes_models::SearchStrategy,
            postal_codes_models::PostalStatus,
            postal_codes_dtos::PostalCodeCandidateDto,
            postal_codes_dtos::PostalCodeLookupResponseDto,
            ApiResponse<postal_codes_dtos::PostalCodeLookupResponseDto>,
            // Address sessions
            address_sessions_dtos::SelectRegionRequestDto,
            address_sessions_dtos::SourceErrorDto,
            address_sessions_dtos::LevelStateDto,
            address_sessions_dtos::PostalStateDto,
            address_sessions_dtos::AddressSessionResponseDto,
            ApiResponse<address_sessions_dtos::AddressSessionResponseDto>,
        )
    ),
    tags(
        (name = "regions", description = "Indonesian administrative regions (provinces, regencies, districts, villages)"),
        (name = "postal-codes", description = "Postal code lookup for a resolved address"),
        (name = "address-sessions", description = "Cascading address selection with postal code resolution"),
    ),
    info(
        title = "Wilayah Kodepos API",
        version = "0.1.0",
        description = "Indonesian region selection and postal code lookup",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
