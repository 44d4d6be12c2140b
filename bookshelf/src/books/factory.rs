use crate::books::repository::BookRepository;
use crate::books::repository::json_book_repository::JsonBookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub fn create_book_repository(config: &Configuration, store: RepositoryStore) -> Box<dyn BookRepository> {
    match store {
        RepositoryStore::JsonFile => {
            Box::new(JsonBookRepository::new(&config.catalog_file))
        }
        RepositoryStore::Memory => {
            Box::new(MemoryBookRepository::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::factory::create_book_repository;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_create_repository_per_store() {
        let config = Configuration::new("/tmp/shelf/books.json");
        assert_eq!("/tmp/shelf/books.json", create_book_repository(&config, RepositoryStore::JsonFile).location());
        assert_eq!("memory", create_book_repository(&config, RepositoryStore::Memory).location());
    }
}
