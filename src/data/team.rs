use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use entity::enums::Grid;

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        logo_url: Option<String>,
        grid: Grid,
    ) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            name: ActiveValue::Set(name),
            logo_url: ActiveValue::Set(logo_url),
            grid: ActiveValue::Set(grid),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find_by_id(id).one(self.db).await
    }

    pub async fn get_active(&self) -> Result<Vec<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::Active.eq(true))
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_active_by_grid(&self, grid: Grid) -> Result<Vec<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::Active.eq(true))
            .filter(entity::team::Column::Grid.eq(grid))
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        name: Option<String>,
        logo_url: Option<Option<String>>,
        grid: Option<Grid>,
    ) -> Result<entity::team::Model, DbErr> {
        let Some(team) = self.find_by_id(id).await? else {
            return Err(DbErr::RecordNotFound(format!("Team {id} not found")));
        };

        let mut active: entity::team::ActiveModel = team.into();

        if let Some(name) = name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(logo_url) = logo_url {
            active.logo_url = ActiveValue::Set(logo_url);
        }
        if let Some(grid) = grid {
            active.grid = ActiveValue::Set(grid);
        }

        active.update(self.db).await
    }

    /// Marks every active team as archived. Used when a season closes so
    /// rosters are rebuilt from scratch for the next one.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of teams archived
    /// - `Err(DbErr)`: Database error
    pub async fn archive_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Team::update_many()
            .col_expr(
                entity::team::Column::Active,
                sea_orm::sea_query::Expr::value(false),
            )
            .filter(entity::team::Column::Active.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Archives a single team, keeping its row for past standings.
    pub async fn archive(&self, id: i32) -> Result<entity::team::Model, DbErr> {
        let Some(team) = self.find_by_id(id).await? else {
            return Err(DbErr::RecordNotFound(format!("Team {id} not found")));
        };

        let mut active: entity::team::ActiveModel = team.into();
        active.active = ActiveValue::Set(false);

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
