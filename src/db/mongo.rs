use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::model::*;
use super::repo::MovieRepo;

const COLLECTION_NAME: &str = "movies";

/// On-disk document shape. `_id` is absent on insert so the server
/// assigns one.
#[derive(Debug, Serialize, Deserialize)]
struct MovieDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    director: String,
    genre: String,
}

impl MovieDocument {
    fn from_fields(fields: &MovieFields) -> Self {
        Self {
            id: None,
            name: fields.name.clone(),
            director: fields.director.clone(),
            genre: fields.genre.clone(),
        }
    }

    fn into_movie(self) -> Movie {
        Movie {
            id: self.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: self.name,
            director: self.director,
            genre: self.genre,
        }
    }
}

pub struct MongoRepository {
    movies: Collection<MovieDocument>,
}

impl MongoRepository {
    /// Connects and pings once. The timeout bounds only this startup
    /// round trip; individual operations later run without one.
    pub async fn connect(url: &str, database: &str, timeout: Duration) -> DbResult<Self> {
        let mut options = ClientOptions::parse(url).await?;
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);

        let client = Client::with_options(options)?;
        let db = client.database(database);

        db.run_command(doc! {"ping": 1}).await?;

        info!("Connected to MongoDB database {}", database);

        Ok(Self {
            movies: db.collection(COLLECTION_NAME),
        })
    }

    fn object_id(key: &MovieKey) -> DbResult<ObjectId> {
        ObjectId::parse_str(key.as_str()).map_err(|e| DbError::Backend(e.to_string()))
    }
}

#[async_trait]
impl MovieRepo for MongoRepository {
    async fn list_movies(&self) -> DbResult<Vec<Movie>> {
        let cursor = self.movies.find(doc! {}).await?;
        let documents: Vec<MovieDocument> = cursor.try_collect().await?;

        Ok(documents
            .into_iter()
            .map(MovieDocument::into_movie)
            .collect())
    }

    async fn create_movie(&self, fields: &MovieFields) -> DbResult<Movie> {
        let inserted = self
            .movies
            .insert_one(MovieDocument::from_fields(fields))
            .await?;

        let id = inserted
            .inserted_id
            .as_object_id()
            .ok_or_else(|| DbError::Backend("insert did not return an object id".to_string()))?;

        let stored = self
            .movies
            .find_one(doc! {"_id": id})
            .await?
            .ok_or_else(|| DbError::NotFound(format!("Movie not found: {}", id.to_hex())))?;

        Ok(stored.into_movie())
    }

    async fn update_movie(&self, key: &MovieKey, fields: &MovieFields) -> DbResult<()> {
        let id = Self::object_id(key)?;

        let update = doc! {"$set": {
            "name": fields.name.clone(),
            "director": fields.director.clone(),
            "genre": fields.genre.clone(),
        }};

        self.movies
            .find_one_and_update(doc! {"_id": id}, update)
            .await?
            .ok_or_else(|| DbError::NotFound(format!("Movie not found: {}", key)))?;

        Ok(())
    }

    async fn delete_movie(&self, key: &MovieKey) -> DbResult<()> {
        let id = Self::object_id(key)?;

        let result = self.movies.delete_one(doc! {"_id": id}).await?;
        if result.deleted_count < 1 {
            return Err(DbError::NotFound(format!("Movie not found: {}", key)));
        }

        Ok(())
    }
}
