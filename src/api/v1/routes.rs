/*
 * Responsibility
 * - v1 URL structure
 * - Which routes are public (identity optional) and which are private (identity required)
 */
use crate::dispatch::{DispatchManager, delete, get, post, put};

use crate::api::v1::handlers::{
    accounts::{delete_account, get_account, update_account},
    health::health,
    principals::{me, validate_principal, whoami},
};

pub fn register(manager: &mut DispatchManager) {
    manager.register_public_route(get("/api/v1/health", health));
    manager.register_public_route(get("/api/v1/whoami", whoami));
    manager.register_public_route(post("/api/v1/principals/validate", validate_principal));

    manager.register_private_route(get("/api/v1/me", me));
    manager.register_private_route(get("/api/v1/accounts/{account_id}", get_account));
    manager.register_private_route(put("/api/v1/accounts/{account_id}", update_account));
    manager.register_private_route(delete("/api/v1/accounts/{account_id}", delete_account));
}
