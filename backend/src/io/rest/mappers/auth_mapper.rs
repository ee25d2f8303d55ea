use shared::AuthTokenResponse;

use crate::domain::commands::auth::IssuedToken;

pub struct AuthMapper;

impl AuthMapper {
    pub fn to_token_dto(issued: IssuedToken) -> AuthTokenResponse {
        AuthTokenResponse {
            access_token: issued.access_token,
            token_type: "bearer".to_string(),
            expires_in: issued.expires_in_secs,
            user_id: issued.parent.id,
            email: issued.parent.email,
        }
    }
}
