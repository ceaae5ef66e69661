use super::*;

#[test]
fn greeting_uses_session_username() {
    let user = User::named("vova");
    assert_eq!(greeting(Some(&user)), "Добро пожаловать, vova!");
}

#[test]
fn greeting_without_identity_after_reload() {
    assert_eq!(greeting(None), "Добро пожаловать!");
    assert_eq!(greeting(Some(&User::default())), "Добро пожаловать!");
}
