use utoipa::OpenApi;

/// OpenAPI document for the KYC onboarding API.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health,
        crate::handlers::get_nationalities,
        crate::handlers::get_countries,
        crate::handlers::get_kvkk_disclosure,
        crate::handlers::validate_profile,
        crate::handlers::submit_profile,
        crate::handlers::get_profile,
    ),
    components(schemas(
        crate::models::Gender,
        crate::models::KycProfile,
        crate::models::KycFormState,
        crate::models::SubmitRequest,
        crate::models::SubmitResponse,
        crate::models::ValidationReport,
        crate::models::KvkkDisclosure,
    )),
    tags(
        (name = "KYC", description = "Profile validation and persistence"),
        (name = "Catalog", description = "Fixed picker catalogs"),
        (name = "Consent", description = "KVKK disclosure text")
    ),
    info(
        title = "Rust KYC API",
        description = "KYC profile validation and persistence against a remote document store"
    )
)]
pub struct ApiDoc;
