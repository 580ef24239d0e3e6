//! Season business logic - Managing which seasonal catalog is on offer.
//!
//! Seasons gate product availability for customers: products attached to a
//! season are only offered while that season is active. Activation is
//! exclusive, so switching seasons deactivates every other one inside the
//! same transaction.

use crate::{
    entities::{Season, season},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*, sea_query::Expr};
use tracing::info;

/// Retrieves all seasons, ordered alphabetically by name.
pub async fn get_all_seasons(db: &DatabaseConnection) -> Result<Vec<season::Model>> {
    Season::find()
        .order_by_asc(season::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Returns the currently active season, or None when no season is active.
pub async fn get_active_season(db: &DatabaseConnection) -> Result<Option<season::Model>> {
    Season::find()
        .filter(season::Column::Active.eq(true))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new season, inactive unless requested otherwise.
pub async fn create_season(
    db: &DatabaseConnection,
    name: String,
    active: bool,
) -> Result<season::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Season name cannot be empty".to_string(),
        });
    }

    let season = season::ActiveModel {
        name: Set(name.trim().to_string()),
        active: Set(active),
        ..Default::default()
    };
    season.insert(db).await.map_err(Into::into)
}

/// Makes the given season the single active one.
///
/// Deactivates every season and then activates the requested one, all inside
/// one transaction so a reader can never observe two active seasons.
pub async fn activate_season(db: &DatabaseConnection, season_id: i64) -> Result<season::Model> {
    let txn = db.begin().await?;

    let season = Season::find_by_id(season_id)
        .one(&txn)
        .await?
        .ok_or(Error::SeasonNotFound { season_id })?;

    Season::update_many()
        .col_expr(season::Column::Active, Expr::value(false))
        .exec(&txn)
        .await?;

    let mut active: season::ActiveModel = season.into();
    active.active = Set(true);
    let updated = active.update(&txn).await?;

    txn.commit().await?;

    info!(season_id, name = %updated.name, "season activated");
    Ok(updated)
}

/// Deactivates every season, leaving only year-round products on offer.
pub async fn deactivate_all_seasons(db: &DatabaseConnection) -> Result<()> {
    Season::update_many()
        .col_expr(season::Column::Active, Expr::value(false))
        .exec(db)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_season, setup_test_db};

    #[tokio::test]
    async fn test_create_season_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_season(&db, "  ".to_string(), false).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_activate_season_is_exclusive() -> Result<()> {
        let db = setup_test_db().await?;
        let christmas = create_test_season(&db, "Christmas", true).await?;
        let easter = create_test_season(&db, "Easter", false).await?;

        let activated = activate_season(&db, easter.id).await?;
        assert!(activated.active);

        // Exactly one season is active, and it is the requested one
        let active = get_active_season(&db).await?.unwrap();
        assert_eq!(active.id, easter.id);

        let all = get_all_seasons(&db).await?;
        let active_count = all.iter().filter(|s| s.active).count();
        assert_eq!(active_count, 1);

        // The previously active season was switched off
        let christmas_now = all.iter().find(|s| s.id == christmas.id).unwrap();
        assert!(!christmas_now.active);

        Ok(())
    }

    #[tokio::test]
    async fn test_activate_unknown_season() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_season(&db, "Christmas", true).await?;

        let result = activate_season(&db, 999).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::SeasonNotFound { season_id: 999 }
        ));

        // The failed activation did not disturb the active season
        assert!(get_active_season(&db).await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_deactivate_all_seasons() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_season(&db, "Christmas", true).await?;
        create_test_season(&db, "Easter", false).await?;

        deactivate_all_seasons(&db).await?;

        assert!(get_active_season(&db).await?.is_none());
        assert!(get_all_seasons(&db).await?.iter().all(|s| !s.active));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_seasons_ordering() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_season(&db, "Easter", false).await?;
        create_test_season(&db, "Christmas", false).await?;

        let all = get_all_seasons(&db).await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Christmas");
        assert_eq!(all[1].name, "Easter");

        Ok(())
    }
}
