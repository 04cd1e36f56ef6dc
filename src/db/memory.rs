use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::model::*;
use super::repo::MovieRepo;

/// In-process movie store with the same key format and not-found semantics
/// as the MongoDB backend. Used by the HTTP-level tests.
pub struct MemoryRepository {
    movies: RwLock<HashMap<String, Movie>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self {
            movies: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieRepo for MemoryRepository {
    async fn list_movies(&self) -> DbResult<Vec<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies.values().cloned().collect())
    }

    async fn create_movie(&self, fields: &MovieFields) -> DbResult<Movie> {
        let id = ObjectId::new().to_hex();
        let movie = Movie {
            id: id.clone(),
            name: fields.name.clone(),
            director: fields.director.clone(),
            genre: fields.genre.clone(),
        };

        let mut movies = self.movies.write().await;
        movies.insert(id, movie.clone());

        Ok(movie)
    }

    async fn update_movie(&self, key: &MovieKey, fields: &MovieFields) -> DbResult<()> {
        let mut movies = self.movies.write().await;
        match movies.get_mut(key.as_str()) {
            Some(movie) => {
                movie.name = fields.name.clone();
                movie.director = fields.director.clone();
                movie.genre = fields.genre.clone();
                Ok(())
            }
            None => Err(DbError::NotFound(format!("Movie not found: {}", key))),
        }
    }

    async fn delete_movie(&self, key: &MovieKey) -> DbResult<()> {
        let mut movies = self.movies.write().await;
        match movies.remove(key.as_str()) {
            Some(_) => Ok(()),
            None => Err(DbError::NotFound(format!("Movie not found: {}", key))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, director: &str, genre: &str) -> MovieFields {
        MovieFields {
            name: name.to_string(),
            director: director.to_string(),
            genre: genre.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = MemoryRepository::new();
        assert!(repo.list_movies().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_mints_key() {
        let repo = MemoryRepository::new();
        let a = repo.create_movie(&fields("Alien", "Scott", "Horror")).await.unwrap();
        let b = repo.create_movie(&fields("Alien", "Scott", "Horror")).await.unwrap();

        assert!(MovieKey::parse(&a.id).is_ok());
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Alien");
    }

    #[tokio::test]
    async fn test_update_visible_in_list() {
        let repo = MemoryRepository::new();
        let movie = repo.create_movie(&fields("Heat", "Mann", "Crime")).await.unwrap();
        let key = MovieKey::parse(&movie.id).unwrap();

        repo.update_movie(&key, &fields("Heat", "Mann", "Thriller"))
            .await
            .unwrap();

        let listed = repo.list_movies().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].genre, "Thriller");
        assert_eq!(listed[0].id, movie.id);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = MemoryRepository::new();
        let key = MovieKey::parse("000000000000000000000000").unwrap();

        let err = repo.update_movie(&key, &fields("X", "Y", "Z")).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = MemoryRepository::new();
        let movie = repo.create_movie(&fields("Ran", "Kurosawa", "Drama")).await.unwrap();
        let key = MovieKey::parse(&movie.id).unwrap();

        repo.delete_movie(&key).await.unwrap();
        let err = repo.delete_movie(&key).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound(_)));
    }
}
