//! Ensures the configured bootstrap administrator exists.

use campus_db::models::user::CreateUser;
use campus_db::repositories::UserRepository;

use crate::auth::password::hash_password;
use crate::config::BootstrapAdmin;
use crate::error::{AppError, AppResult};

/// Create `admin` as an administrator unless a user with that name exists.
///
/// Returns `true` when a user was created. An existing account is left as is,
/// including its password.
pub async fn ensure_admin(users: &dyn UserRepository, admin: &BootstrapAdmin) -> AppResult<bool> {
    if users.find_by_username(&admin.username).await?.is_some() {
        return Ok(false);
    }

    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    users
        .create(&CreateUser {
            username: admin.username.clone(),
            email: admin.email.clone(),
            password_hash,
            is_admin: true,
        })
        .await?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use campus_db::memory::MemoryUserRepo;

    use super::*;
    use crate::auth::password::verify_password;

    fn admin() -> BootstrapAdmin {
        BootstrapAdmin {
            username: "root".into(),
            email: "root@ucsb.edu".into(),
            password: "initial-password".into(),
        }
    }

    #[tokio::test]
    async fn creates_admin_once() {
        let users = MemoryUserRepo::new();

        assert!(ensure_admin(&users, &admin()).await.unwrap());
        assert!(!ensure_admin(&users, &admin()).await.unwrap());

        let all = users.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_admin);
        assert!(verify_password("initial-password", &all[0].password_hash).unwrap());
    }
}
