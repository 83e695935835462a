pub mod inventory;
pub mod warehouses;

use crate::entities::warehouse;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

/// Returns whether a warehouse row with `id` exists on `conn`.
///
/// Generic over the connection so the check can run inside the same
/// transaction as the write that depends on it.
pub async fn warehouse_exists<C>(conn: &C, id: i32) -> Result<bool, DbErr>
where
    C: ConnectionTrait,
{
    Ok(warehouse::Entity::find_by_id(id).one(conn).await?.is_some())
}
