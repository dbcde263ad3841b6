//! Endpoint catalog
//!
//! One function per remote operation. Each only fills in method, path,
//! query and body; sending and decoding happen in [`super::ApiClient`].

use carcatalogue_domain::constants::{LOGIN_PATH, REFRESH_PATH, REGISTRATION_PATH};
use carcatalogue_domain::{
    AdminCarFilters, AdminContractFilters, AuthRequest, CatalogueError, CatalogueFilters,
    ChangePasswordRequest, CreateCarModelName, CreateCarModelRequest, CreateCarModelsBrand,
    CreateCarRequest, CreateContractRequest, CreateDocumentRequest, FileUpload, ModelFilters,
    PageRequest, RegistrationRequest, ResetPasswordRequest, RoleRequest, UpdateCarModelRequest,
    UpdateCarRequest, UpdateCarStateRequest, UpdateContractRequest, UpdateDocumentRequest,
    UpdateProfileRequest, UserFilters,
};

use super::request::{ApiRequest, MultipartPart};

type Result<T> = std::result::Result<T, CatalogueError>;

/* -------------------------------------------------------------------------- */
/* Authentication                                                              */
/* -------------------------------------------------------------------------- */

pub fn login(request: &AuthRequest) -> Result<ApiRequest> {
    ApiRequest::post(LOGIN_PATH).json(request)
}

pub fn register(request: &RegistrationRequest) -> Result<ApiRequest> {
    ApiRequest::post(REGISTRATION_PATH).json(request)
}

pub fn logout() -> ApiRequest {
    ApiRequest::post("api/logout")
}

/// Rotate the session using the refresh cookie. Carries no body.
pub fn refresh() -> ApiRequest {
    ApiRequest::post(REFRESH_PATH)
}

pub fn request_password_reset(request: &ResetPasswordRequest) -> Result<ApiRequest> {
    ApiRequest::post("api/reset-password").json(request)
}

pub fn reset_password(code: &str, request: &RegistrationRequest) -> Result<ApiRequest> {
    ApiRequest::post("api/reset").query_pair("code", code).json(request)
}

/* -------------------------------------------------------------------------- */
/* Profile & documents                                                         */
/* -------------------------------------------------------------------------- */

pub fn me() -> ApiRequest {
    ApiRequest::get("api/profile/me")
}

pub fn profile() -> ApiRequest {
    ApiRequest::get("api/profile")
}

pub fn update_profile(request: &UpdateProfileRequest) -> Result<ApiRequest> {
    ApiRequest::patch("api/profile").json(request)
}

pub fn delete_profile() -> ApiRequest {
    ApiRequest::delete("api/profile")
}

pub fn change_password(request: &ChangePasswordRequest) -> Result<ApiRequest> {
    ApiRequest::patch("api/profile/password").json(request)
}

/// Ask the server to email a verification code.
pub fn request_email_verification() -> ApiRequest {
    ApiRequest::get("api/profile/verify")
}

pub fn confirm_email(code: &str) -> ApiRequest {
    ApiRequest::get("api/verify").query_pair("code", code)
}

pub fn document() -> ApiRequest {
    ApiRequest::get("api/profile/document")
}

pub fn create_document(request: &CreateDocumentRequest) -> Result<ApiRequest> {
    ApiRequest::post("api/profile/document").json(request)
}

pub fn update_document(request: &UpdateDocumentRequest) -> Result<ApiRequest> {
    ApiRequest::patch("api/profile/document").json(request)
}

pub fn delete_document() -> ApiRequest {
    ApiRequest::delete("api/profile/document")
}

/* -------------------------------------------------------------------------- */
/* Catalogue & favorites                                                       */
/* -------------------------------------------------------------------------- */

pub fn catalogue(filters: &CatalogueFilters, page: &PageRequest) -> ApiRequest {
    ApiRequest::get("api/car/catalogue").query(filters.query_pairs()).query(page.query_pairs())
}

pub fn car(car_id: i64) -> ApiRequest {
    ApiRequest::get(format!("api/car/{car_id}"))
}

pub fn filter_brands() -> ApiRequest {
    ApiRequest::get("api/car/filters/brands")
}

pub fn filter_models() -> ApiRequest {
    ApiRequest::get("api/car/filters/models")
}

pub fn filter_body_types() -> ApiRequest {
    ApiRequest::get("api/car/filters/body-types")
}

pub fn filter_classes() -> ApiRequest {
    ApiRequest::get("api/car/filters/classes")
}

/// Price bounds ignore the price range of `filters`.
pub fn price_bounds(filters: &CatalogueFilters) -> ApiRequest {
    ApiRequest::get("api/car/filters/min-max-cell").query(filters.price_bounds_query())
}

pub fn favorites(page: &PageRequest) -> ApiRequest {
    ApiRequest::get("api/cars/favorites").query(page.query_pairs())
}

pub fn favorite(car_id: i64) -> ApiRequest {
    ApiRequest::get(format!("api/cars/favorites/{car_id}"))
}

pub fn add_favorite(car_id: i64) -> ApiRequest {
    ApiRequest::post(format!("api/cars/favorites/{car_id}"))
}

pub fn remove_favorite(car_id: i64) -> ApiRequest {
    ApiRequest::delete(format!("api/cars/favorites/{car_id}"))
}

/* -------------------------------------------------------------------------- */
/* Contracts                                                                   */
/* -------------------------------------------------------------------------- */

pub fn contracts(page: &PageRequest) -> ApiRequest {
    ApiRequest::get("api/contracts").query(page.query_pairs())
}

pub fn contract(contract_id: i64) -> ApiRequest {
    ApiRequest::get(format!("api/contracts/{contract_id}"))
}

pub fn create_contract(request: &CreateContractRequest) -> Result<ApiRequest> {
    ApiRequest::post("api/contracts").json(request)
}

pub fn update_contract(contract_id: i64, request: &UpdateContractRequest) -> Result<ApiRequest> {
    ApiRequest::patch(format!("api/contracts/{contract_id}")).json(request)
}

pub fn cancel_contract(contract_id: i64) -> ApiRequest {
    ApiRequest::delete(format!("api/contracts/{contract_id}/cancel"))
}

/* -------------------------------------------------------------------------- */
/* Admin: cars                                                                 */
/* -------------------------------------------------------------------------- */

pub fn admin_cars(filters: &AdminCarFilters, page: &PageRequest) -> ApiRequest {
    ApiRequest::get("api/admin/cars").query(filters.query_pairs()).query(page.query_pairs())
}

pub fn admin_car(car_id: i64) -> ApiRequest {
    ApiRequest::get(format!("api/admin/cars/{car_id}"))
}

/// Multipart create: the car as a JSON part named `car`, the picture as
/// `image`.
pub fn create_car(car: &CreateCarRequest, image: FileUpload) -> Result<ApiRequest> {
    Ok(ApiRequest::post("api/admin/cars")
        .multipart(vec![MultipartPart::json("car", car)?, MultipartPart::file("image", image)]))
}

pub fn update_car(car_id: i64, request: &UpdateCarRequest) -> Result<ApiRequest> {
    ApiRequest::patch(format!("api/admin/cars/{car_id}")).json(request)
}

pub fn delete_car(car_id: i64) -> ApiRequest {
    ApiRequest::delete(format!("api/admin/cars/{car_id}"))
}

pub fn update_car_state(car_id: i64, request: &UpdateCarStateRequest) -> Result<ApiRequest> {
    ApiRequest::patch(format!("api/admin/cars/{car_id}/state")).json(request)
}

pub fn car_states() -> ApiRequest {
    ApiRequest::get("api/admin/cars/state")
}

pub fn upload_car_image(car_id: i64, image: FileUpload) -> ApiRequest {
    ApiRequest::post(format!("api/admin/{car_id}/images"))
        .multipart(vec![MultipartPart::file("file", image)])
}

/* -------------------------------------------------------------------------- */
/* Admin: models & filter dictionaries                                         */
/* -------------------------------------------------------------------------- */

pub fn admin_models(filters: &ModelFilters, page: &PageRequest) -> ApiRequest {
    ApiRequest::get("api/admin/models").query(filters.query_pairs()).query(page.query_pairs())
}

pub fn admin_model(model_id: i64) -> ApiRequest {
    ApiRequest::get(format!("api/admin/models/{model_id}"))
}

pub fn create_model(request: &CreateCarModelRequest) -> Result<ApiRequest> {
    ApiRequest::post("api/admin/models").json(request)
}

pub fn update_model(model_id: i64, request: &UpdateCarModelRequest) -> Result<ApiRequest> {
    ApiRequest::put(format!("api/admin/models/{model_id}")).json(request)
}

pub fn delete_model(model_id: i64) -> ApiRequest {
    ApiRequest::delete(format!("api/admin/models/{model_id}"))
}

pub fn admin_brands() -> ApiRequest {
    ApiRequest::get("api/admin/filters/brands")
}

pub fn create_brand(request: &CreateCarModelsBrand) -> Result<ApiRequest> {
    ApiRequest::post("api/admin/filters/brands").json(request)
}

pub fn admin_model_names() -> ApiRequest {
    ApiRequest::get("api/admin/filters/models")
}

pub fn create_model_name(request: &CreateCarModelName) -> Result<ApiRequest> {
    ApiRequest::post("api/admin/filters/models").json(request)
}

pub fn admin_classes() -> ApiRequest {
    ApiRequest::get("api/admin/filters/classes")
}

pub fn create_class(request: &CreateCarModelName) -> Result<ApiRequest> {
    ApiRequest::post("api/admin/filters/classes").json(request)
}

/* -------------------------------------------------------------------------- */
/* Admin: contracts, users, documents                                          */
/* -------------------------------------------------------------------------- */

pub fn admin_contracts(filters: &AdminContractFilters, page: &PageRequest) -> ApiRequest {
    ApiRequest::get("api/admin/contracts").query(filters.query_pairs()).query(page.query_pairs())
}

pub fn admin_contract(contract_id: i64) -> ApiRequest {
    ApiRequest::get(format!("api/admin/contracts/{contract_id}"))
}

pub fn confirm_contract(contract_id: i64) -> ApiRequest {
    ApiRequest::patch(format!("api/admin/contracts/{contract_id}/confirm"))
}

pub fn admin_cancel_contract(contract_id: i64) -> ApiRequest {
    ApiRequest::delete(format!("api/admin/contracts/{contract_id}/cancel"))
}

pub fn confirm_cancellation(contract_id: i64) -> ApiRequest {
    ApiRequest::patch(format!("api/admin/contracts/{contract_id}/confirm-cancellation"))
}

pub fn users(filters: &UserFilters, page: &PageRequest) -> ApiRequest {
    ApiRequest::get("api/admin/users").query(filters.query_pairs()).query(page.query_pairs())
}

pub fn user(user_id: i64) -> ApiRequest {
    ApiRequest::get(format!("api/admin/users/{user_id}"))
}

pub fn update_user_role(user_id: i64, request: &RoleRequest) -> Result<ApiRequest> {
    ApiRequest::patch(format!("api/admin/users/{user_id}/updateRole")).json(request)
}

pub fn ban_user(user_id: i64) -> ApiRequest {
    ApiRequest::patch(format!("api/admin/users/{user_id}/ban"))
}

pub fn unban_user(user_id: i64) -> ApiRequest {
    ApiRequest::patch(format!("api/admin/users/{user_id}/unban"))
}

pub fn documents(only_unverified: bool, page: &PageRequest) -> ApiRequest {
    ApiRequest::get("api/admin/documents")
        .query_pair("onlyUnverified", only_unverified)
        .query(page.query_pairs())
}

pub fn verify_document(document_id: i64) -> ApiRequest {
    ApiRequest::patch(format!("api/admin/documents/{document_id}/verify"))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use reqwest::Method;

    use super::*;
    use crate::api::RequestBody;

    fn pairs(request: &ApiRequest) -> Vec<(&str, &str)> {
        request.query_pairs().iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    #[test]
    fn catalogue_appends_paging_after_filters() {
        let filters = CatalogueFilters {
            brands: BTreeSet::from(["Audi".to_string(), "BMW".to_string()]),
            min_price: Some(1000.0),
            ..CatalogueFilters::default()
        };
        let request = catalogue(&filters, &PageRequest::new(2, 20));

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.path(), "api/car/catalogue");
        assert_eq!(
            pairs(&request),
            vec![
                ("brand", "Audi"),
                ("brand", "BMW"),
                ("min_cell", "1000"),
                ("page", "2"),
                ("size", "20"),
            ]
        );
    }

    #[test]
    fn price_bounds_drop_price_range() {
        let filters = CatalogueFilters {
            model: Some("X5".into()),
            min_price: Some(1000.0),
            max_price: Some(5000.0),
            ..CatalogueFilters::default()
        };
        let request = price_bounds(&filters);
        assert_eq!(pairs(&request), vec![("model", "X5")]);
    }

    #[test]
    fn favorites_paths_carry_car_id() {
        assert_eq!(add_favorite(7).method(), Method::POST);
        assert_eq!(add_favorite(7).path(), "api/cars/favorites/7");
        assert_eq!(remove_favorite(7).method(), Method::DELETE);
        assert_eq!(favorite(7).path(), "api/cars/favorites/7");
    }

    #[test]
    fn cancel_uses_delete_on_cancel_subresource() {
        let request = cancel_contract(42);
        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(request.path(), "api/contracts/42/cancel");
    }

    #[test]
    fn create_car_is_multipart_with_car_and_image() {
        let car = CreateCarRequest {
            model_id: 4,
            year_of_issue: 2020,
            gos_number: "A123BC".into(),
            vin: "WBA123".into(),
            rent: 3500.0,
            state_id: 1,
        };
        let request =
            create_car(&car, FileUpload::new("car.jpg", "image/jpeg", vec![0xFF, 0xD8])).unwrap();

        let RequestBody::Multipart(parts) = request.body() else {
            panic!("expected multipart body");
        };
        let names: Vec<_> = parts
            .iter()
            .map(|part| match part {
                MultipartPart::Json { name, .. } | MultipartPart::File { name, .. } => name.as_str(),
            })
            .collect();
        assert_eq!(names, vec!["car", "image"]);
    }

    #[test]
    fn update_model_uses_put() {
        let request = update_model(3, &UpdateCarModelRequest::default()).unwrap();
        assert_eq!(request.method(), Method::PUT);
    }

    #[test]
    fn documents_always_send_verification_flag() {
        let request = documents(true, &PageRequest::default());
        assert_eq!(pairs(&request)[0], ("onlyUnverified", "true"));
    }

    #[test]
    fn reset_password_sends_code_in_query() {
        let request = reset_password("abc", &RegistrationRequest::new("driver01", "secret1", "Ivanov", "d@example.com")).unwrap();
        assert_eq!(pairs(&request), vec![("code", "abc")]);
        assert!(matches!(request.body(), RequestBody::Json(_)));
    }

    #[test]
    fn session_endpoints_bypass_auth() {
        assert!(refresh().bypasses_auth());
        assert!(login(&AuthRequest { username: "u".into(), password: "p".into() }).unwrap().bypasses_auth());
        assert!(!logout().bypasses_auth());
    }
}
