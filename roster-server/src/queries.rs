/// SQL queries for roster database operations
pub struct Queries;

impl Queries {
    pub const CREATE_USER: &'static str = r#"
        INSERT INTO users (username)
        VALUES ($1)
        RETURNING id, username
    "#;

    pub const LIST_USERS: &'static str = r#"
        SELECT id, username
        FROM users
    "#;

    pub const COUNT_USERS_NAMED: &'static str = r#"
        SELECT COUNT(*) as count
        FROM users
        WHERE username = $1
    "#;
}
