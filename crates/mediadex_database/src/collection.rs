//! PostgreSQL-backed shard collection.

use crate::schema::{ensure_schema, validate_table_name};
use async_trait::async_trait;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sql_types::{BigInt, Nullable, Text};
use mediadex_core::{Media, MediaBuilder, MediaFilter};
use mediadex_error::{MediadexError, MediadexResult, StoreError, StoreErrorKind};
use mediadex_store::MediaCollection;

/// Connection pool type used by the PostgreSQL backend.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// One shard stored as a PostgreSQL table.
#[derive(Clone)]
pub struct PostgresCollection {
    pool: PgPool,
    table: String,
}

impl std::fmt::Debug for PostgresCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresCollection")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

#[derive(QueryableByName)]
struct MediaRow {
    #[diesel(sql_type = Text)]
    file_id: String,
    #[diesel(sql_type = Nullable<Text>)]
    file_ref: Option<String>,
    #[diesel(sql_type = Text)]
    file_name: String,
    #[diesel(sql_type = BigInt)]
    file_size: i64,
    #[diesel(sql_type = Nullable<Text>)]
    file_type: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    mime_type: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    caption: Option<String>,
}

impl TryFrom<MediaRow> for Media {
    type Error = StoreError;

    fn try_from(row: MediaRow) -> Result<Self, Self::Error> {
        MediaBuilder::default()
            .file_id(row.file_id)
            .file_ref(row.file_ref)
            .file_name(row.file_name)
            .file_size(row.file_size)
            .file_type(row.file_type)
            .mime_type(row.mime_type)
            .caption(row.caption)
            .build()
            .map_err(|e| StoreError::new(StoreErrorKind::Serialization(e.to_string())))
    }
}

#[derive(QueryableByName)]
struct CountRow {
    #[diesel(sql_type = BigInt)]
    count: i64,
}

/// WHERE clause for a filter. Placeholders: `$1` pattern, `$2` file type.
fn where_clause(filter: &MediaFilter) -> String {
    let mut clause = if *filter.match_caption() {
        "(file_name ~* $1 OR caption ~* $1)".to_string()
    } else {
        "file_name ~* $1".to_string()
    };

    if filter.file_type().is_some() {
        clause.push_str(" AND file_type = $2");
    }

    clause
}

/// PostgreSQL refused the pattern itself (SQLSTATE 2201B).
fn is_invalid_regex(e: &DieselError) -> bool {
    matches!(
        e,
        DieselError::DatabaseError(_, info)
            if info.message().starts_with("invalid regular expression")
    )
}

fn filtered_query<'f>(sql: String, filter: &MediaFilter) -> BoxedSqlQuery<'f, Pg, SqlQuery> {
    let query = diesel::sql_query(sql)
        .into_boxed::<Pg>()
        .bind::<Text, _>(filter.pattern().postgres_source().to_string());

    match filter.file_type() {
        Some(file_type) => query.bind::<Text, _>(file_type.clone()),
        None => query,
    }
}

impl PostgresCollection {
    /// Wrap an existing pool. The table must already exist.
    ///
    /// # Errors
    ///
    /// Returns error if `table` is not a plain identifier.
    pub fn new(pool: PgPool, table: impl Into<String>) -> MediadexResult<Self> {
        let table = table.into();
        validate_table_name(&table)?;
        Ok(Self { pool, table })
    }

    /// Open a pool to `url` and create the shard table if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the pool cannot be built, the table name is invalid
    /// or schema creation fails.
    #[tracing::instrument(skip(url))]
    pub async fn connect(url: &str, table: &str) -> MediadexResult<Self> {
        validate_table_name(table)?;

        let manager = ConnectionManager::<PgConnection>::new(url);
        let pool = tokio::task::spawn_blocking(move || Pool::builder().build(manager))
            .await
            .map_err(|e| StoreError::new(StoreErrorKind::Connection(e.to_string())))?
            .map_err(StoreError::from)?;

        let collection = Self::new(pool, table)?;
        let table = collection.table.clone();
        collection
            .run(move |conn| Ok(ensure_schema(conn, &table)?))
            .await?;

        tracing::info!(table = %collection.table, "Connected PostgreSQL shard");
        Ok(collection)
    }

    /// Table backing this shard.
    pub fn table(&self) -> &str {
        &self.table
    }

    async fn run<T, F>(&self, f: F) -> MediadexResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> MediadexResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(StoreError::from)?;
            f(&mut conn)
        })
        .await
        .map_err(|e| StoreError::new(StoreErrorKind::Query(e.to_string())))?
    }
}

#[async_trait]
impl MediaCollection for PostgresCollection {
    #[tracing::instrument(skip(self, media), fields(table = %self.table, file_id = %media.file_id()))]
    async fn insert(&self, media: &Media) -> MediadexResult<()> {
        let sql = format!(
            "INSERT INTO {} (file_id, file_ref, file_name, file_size, file_type, mime_type, caption) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
            self.table
        );
        let media = media.clone();

        self.run(move |conn| {
            let result = diesel::sql_query(sql)
                .bind::<Text, _>(media.file_id())
                .bind::<Nullable<Text>, _>(media.file_ref().as_deref())
                .bind::<Text, _>(media.file_name())
                .bind::<BigInt, _>(*media.file_size())
                .bind::<Nullable<Text>, _>(media.file_type().as_deref())
                .bind::<Nullable<Text>, _>(media.mime_type().as_deref())
                .bind::<Nullable<Text>, _>(media.caption().as_deref())
                .execute(conn);

            match result {
                Ok(_) => Ok(()),
                Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                    let kind = StoreErrorKind::DuplicateKey(media.file_id().clone());
                    Err(StoreError::new(kind).into())
                }
                Err(e) => Err(StoreError::from(e).into()),
            }
        })
        .await
    }

    #[tracing::instrument(skip(self, filter), fields(table = %self.table))]
    async fn count(&self, filter: &MediaFilter) -> MediadexResult<u64> {
        let sql = format!(
            "SELECT COUNT(*) AS count FROM {} WHERE {}",
            self.table,
            where_clause(filter)
        );
        let filter = filter.clone();

        self.run(move |conn| {
            match filtered_query(sql, &filter).get_result::<CountRow>(conn) {
                Ok(row) => Ok(u64::try_from(row.count).unwrap_or_default()),
                Err(e) if is_invalid_regex(&e) => {
                    tracing::warn!(
                        query = %filter.pattern().query(),
                        error = %e,
                        "PostgreSQL rejected pattern, counting no matches"
                    );
                    Ok(0)
                }
                Err(e) => Err(StoreError::from(e).into()),
            }
        })
        .await
    }

    #[tracing::instrument(skip(self, filter), fields(table = %self.table))]
    async fn find(
        &self,
        filter: &MediaFilter,
        skip: usize,
        limit: usize,
    ) -> MediadexResult<Vec<Media>> {
        let next = if filter.file_type().is_some() { 3 } else { 2 };
        let sql = format!(
            "SELECT file_id, file_ref, file_name, file_size, file_type, mime_type, caption \
             FROM {} WHERE {} ORDER BY seq DESC OFFSET ${} LIMIT ${}",
            self.table,
            where_clause(filter),
            next,
            next + 1
        );
        let filter = filter.clone();
        let skip = i64::try_from(skip).unwrap_or(i64::MAX);
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        self.run(move |conn| {
            let rows = match filtered_query(sql, &filter)
                .bind::<BigInt, _>(skip)
                .bind::<BigInt, _>(limit)
                .load::<MediaRow>(conn)
            {
                Ok(rows) => rows,
                Err(e) if is_invalid_regex(&e) => {
                    tracing::warn!(
                        query = %filter.pattern().query(),
                        error = %e,
                        "PostgreSQL rejected pattern, returning no matches"
                    );
                    return Ok(Vec::new());
                }
                Err(e) => return Err(StoreError::from(e).into()),
            };

            rows.into_iter()
                .map(|row| Media::try_from(row).map_err(MediadexError::from))
                .collect()
        })
        .await
    }

    async fn len(&self) -> MediadexResult<u64> {
        let sql = format!("SELECT COUNT(*) AS count FROM {}", self.table);

        self.run(move |conn| {
            let row: CountRow = diesel::sql_query(sql)
                .get_result(conn)
                .map_err(StoreError::from)?;
            Ok(u64::try_from(row.count).unwrap_or_default())
        })
        .await
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
