//! Page markup.

pub const HOME: &str = r#"<main><h1>Storefront</h1><a href="/sign-in">Sign in</a></main>"#;

pub const SIGN_IN_FORM: &str = r#"<h1>Sign in</h1>
<form method="post" action="/api/auth/callback/credentials">
<input type="email" name="email" required>
<input type="password" name="password" required>
<button type="submit">Sign in</button>
</form>
<a href="/sign-up">Create an account</a>"#;

pub const SIGN_UP_FORM: &str = r#"<h1>Create an account</h1>
<form method="post" action="/api/auth/signup">
<input type="text" name="name" required>
<input type="email" name="email" required>
<input type="password" name="password" required>
<button type="submit">Sign up</button>
</form>
<a href="/sign-in">Already have an account?</a>"#;
