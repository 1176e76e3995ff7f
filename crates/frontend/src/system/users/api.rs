use contracts::system::users::Role;

use crate::shared::crud::{AfterChange, EntityConfig, DUPLICATE_LOGIN};

/// Plain accounts, created by admins and managers
pub static USERS: EntityConfig = EntityConfig {
    entity: "user",
    collection_path: "/api/users",
    item_path: "/api/users",
    confirm_delete: "Are you sure you want to delete this user?",
    created: "User created",
    deleted: "User deleted",
    create_failed: "Failed to create user",
    delete_failed: "Failed to delete user",
    duplicate_message: Some(DUPLICATE_LOGIN),
    after_change: AfterChange::Reload,
};

/// Same endpoints as [`USERS`]; the role field of the payload differs
pub static MANAGERS: EntityConfig = EntityConfig {
    entity: "manager",
    collection_path: "/api/users",
    item_path: "/api/users",
    confirm_delete: "Are you sure you want to delete this manager?",
    created: "Manager created",
    deleted: "Manager deleted",
    create_failed: "Failed to create manager",
    delete_failed: "Failed to delete manager",
    duplicate_message: Some(DUPLICATE_LOGIN),
    after_change: AfterChange::Reload,
};

pub fn config_for(role: Role) -> &'static EntityConfig {
    match role {
        Role::Manager => &MANAGERS,
        Role::Admin | Role::User => &USERS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::testing::{gateway, RecordingTransport};
    use crate::shared::api_utils::Method;
    use crate::shared::crud::{CrudHandler, Outcome};
    use crate::shared::notifications::NotificationKind;
    use crate::shared::page_effects::testing::{Recorded, ScriptedEffects};
    use contracts::system::users::CreateUserDto;
    use futures::executor::block_on;

    #[test]
    fn test_declined_user_delete_sends_no_request() {
        let transport = RecordingTransport::default();
        let effects = ScriptedEffects::answering(false);
        let handler = CrudHandler::new(&USERS, gateway(&transport), effects.clone());

        let outcome = block_on(handler.delete("u-1"));

        assert_eq!(outcome, Outcome::Declined);
        assert_eq!(transport.requests().len(), 0);
        assert_eq!(
            effects.recorded(),
            vec![Recorded::Confirm(USERS.confirm_delete.into())]
        );
    }

    #[test]
    fn test_manager_is_created_through_users_endpoint() {
        let transport = RecordingTransport::default();
        transport.reply(201, "");
        let effects = ScriptedEffects::answering(true);
        let handler = CrudHandler::new(config_for(Role::Manager), gateway(&transport), effects.clone());
        let dto = CreateUserDto::from_form(Role::Manager, "boss", "secret1", "", "1990-04-01", "male");

        let outcome = block_on(handler.create(&dto));

        assert!(outcome.is_completed());
        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, "/api/users");
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["role"], "manager");
        assert_eq!(body["full_name"], "New Manager");
        assert_eq!(
            effects.recorded(),
            vec![
                Recorded::Notify("Manager created".into(), NotificationKind::Success),
                Recorded::Reload,
            ]
        );
    }

    #[test]
    fn test_duplicate_login_message() {
        let transport = RecordingTransport::default();
        transport.reply(500, "pq: duplicate key value violates unique constraint \"users_login_key\"");
        let effects = ScriptedEffects::answering(true);
        let handler = CrudHandler::new(&USERS, gateway(&transport), effects.clone());
        let dto = CreateUserDto::from_form(Role::User, "ann", "secret1", "Ann", "", "female");

        block_on(handler.create(&dto));

        assert_eq!(
            effects.recorded(),
            vec![Recorded::Notify(
                "A user with this login already exists".into(),
                NotificationKind::Error
            )]
        );
    }
}
