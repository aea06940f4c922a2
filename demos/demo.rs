use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Form, Router,
};
use nodeworthy::{
    html::{self, Content, Element},
    node::Node,
    CellOptions, Config, EmailInputOptions, FormOptions, Nodeworthy, NumberInputOptions,
    TextInputOptions,
};
use tracing_subscriber::EnvFilter;

/// Form every clickable button submits through, see [`clickable`]
const CLICK_FORM: &str = "click-form";

#[derive(Debug, Clone, serde::Deserialize)]
struct Person {
    name: String,
    age: String,
    country: String,
    email: String,
}

#[derive(Debug, serde::Deserialize)]
struct Click {
    id: String,
}

#[derive(Clone)]
struct AppState {
    people: Arc<Mutex<Vec<Person>>>,
    logged_in: Arc<AtomicBool>,
    image_shown: Arc<AtomicBool>,
    config: Config,
}

impl AppState {
    fn new(people: Vec<Person>) -> Self {
        AppState {
            people: Arc::new(Mutex::new(people)),
            logged_in: Default::default(),
            image_shown: Default::default(),
            config: Config::with_layout(|content| {
                html::html(Content::List(vec![
                    html::head(html::title("Nodeworthy")).into(),
                    html::body(content).into(),
                ]))
            }),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let people = [
        ("John Johnnies", 25, "US", "john@fakemail.com"),
        ("Jake Jacobson", 30, "CA", "jake@fakemail.com"),
        ("Jenny Jennette", 42, "FR", "jenny@fakemail.com"),
    ]
    .map(|(name, age, country, email)| Person {
        name: name.to_string(),
        age: age.to_string(),
        country: country.to_string(),
        email: email.to_string(),
    });

    let app = Router::new()
        .route("/", get(index).post(submit))
        .route("/click", post(click))
        .with_state(AppState::new(people.to_vec()));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    tracing::info!("listening on http://localhost:3000");
    axum::serve(listener, app).await.unwrap();
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.config.render(page(&state, None)))
}

async fn submit(State(state): State<AppState>, Form(person): Form<Person>) -> Html<String> {
    let alert = match validate(&person) {
        Ok(()) => {
            tracing::info!(?person, "adding row");

            if let Ok(mut people) = state.people.lock() {
                people.push(Person {
                    country: person.country.to_uppercase(),
                    ..person
                });
            }
            None
        }
        Err(alert) => {
            tracing::debug!(?person, alert, "rejected submission");
            Some(alert)
        }
    };

    Html(state.config.render(page(&state, alert)))
}

async fn click(State(state): State<AppState>, Form(click): Form<Click>) -> Html<String> {
    dispatch_click(&state, &click.id);
    Html(state.config.render(page(&state, None)))
}

/// Clicks the element with `id` on the current page, running its listeners.
///
/// Returns false if there's no such element.
fn dispatch_click(state: &AppState, id: &str) -> bool {
    let page = page(state, None);

    match page.get_element_by_id(id) {
        Some(target) => {
            tracing::debug!(id, listeners = target.listener_count("click"), "clicking");
            target.click();
            true
        }
        None => {
            tracing::debug!(id, "nothing to click");
            false
        }
    }
}

/// The builder doesn't check values against each other, so we do it here.
fn validate(person: &Person) -> Result<(), &'static str> {
    if person.name.is_empty() {
        return Err("Please enter a valid name...");
    }

    match person.age.trim().parse::<i64>() {
        Ok(age) if age >= 1 => {}
        _ => return Err("Please enter a valid age..."),
    }

    if person.country.chars().count() != 2 {
        return Err("Please enter a valid country code...");
    }

    let email = &person.email;
    if email.len() < 5 || !email.contains('@') || !email.contains('.') {
        return Err("Please enter a valid email address...");
    }

    Ok(())
}

/// Makes `button` submit its own id to `/click` through [`CLICK_FORM`].
fn clickable(mut button: Element) -> Element {
    if let Some(id) = button.id().map(str::to_string) {
        button.set_attribute("form", CLICK_FORM);
        button.set_attribute("name", "id");
        button.set_attribute("value", &id);
    }
    button
}

fn click_form(nw: Nodeworthy) -> Element {
    nw.form(
        FormOptions {
            action: Some("/click".into()),
            method: Some("post".into()),
            ..Default::default()
        },
        (),
        CLICK_FORM,
    )
}

fn page(state: &AppState, alert: Option<&str>) -> Element {
    let nw = Nodeworthy::new();

    if !state.logged_in.load(Ordering::SeqCst) {
        return login(nw, state);
    }

    let mut app = nw.div("flex-column", "app");
    app.append_child(click_form(nw));
    app.append_child(header(nw));
    app.append_child(nav(nw));

    let mut main = nw.main("flex-center flex-column", "main");
    main.append_child(nw.h("Title", 2, (), ""));

    let mut p = nw.p("This is a paragraph with a", (), "");
    p.append_child(nw.span(" span that highlights text!", "text-highlight", ""));
    main.append_child(p);

    if let Some(alert) = alert {
        main.append_child(nw.p(alert, "alert", "alert"));
    }

    main.append_child(form(nw));

    let image_shown = state.image_shown.clone();
    main.append_child(clickable(nw.button_on_click(
        "Click me!",
        move |event| {
            event.prevent_default();
            image_shown.store(true, Ordering::SeqCst);
        },
        (),
        "button-img",
    )));

    main.append_child(lists(nw));

    let people = match state.people.lock() {
        Ok(people) => people.clone(),
        Err(_) => Vec::new(),
    };
    main.append_child(table(nw, &people));

    app.append_child(main);

    let mut footer = nw.footer("flex-center", "");
    footer.append_child(nw.p("©2025 - Some Company", (), ""));
    app.append_child(footer);

    if state.image_shown.load(Ordering::SeqCst) {
        show_image(nw, &mut app);
    }

    app
}

/// Swaps the image button for the picture it reveals.
fn show_image(nw: Nodeworthy, page: &mut Element) {
    let Some(main) = page.get_element_by_id_mut("main") else {
        return;
    };

    if main.remove_child_by_id("button-img").is_none() {
        return;
    }

    let mut div = nw.div("flex-center flex-row", "div-img");
    let mut a = nw.a("https://picsum.photos/", "", (), "");
    a.append_child(nw.img("https://picsum.photos/200", "A Picsum Image", (), ""));
    div.append_child(a);
    main.append_child(div);
}

fn login(nw: Nodeworthy, state: &AppState) -> Element {
    let logged_in = state.logged_in.clone();
    let button = nw.button_on_click(
        "Login",
        move |_| {
            tracing::info!("logged in");
            logged_in.store(true, Ordering::SeqCst);
        },
        (),
        "button-login",
    );

    let mut div = nw.div("flex-column", "login");
    div.append_child(click_form(nw));
    div.append_child(clickable(button));
    div
}

fn header(nw: Nodeworthy) -> Element {
    let mut header = nw.header((), "");

    let mut top = nw.div("background-dark border-bottom flex-row", "div-h1");
    top.append_child(nw.h("This is an H1...", 1, (), ""));
    header.append_child(top);

    let mut bottom = nw.div("background-dark border-bottom flex-row", "");
    bottom.append_child(nw.h("While this is an H6", 6, (), ""));
    header.append_child(bottom);

    header
}

fn nav(nw: Nodeworthy) -> Element {
    let mut nav = nw.nav("flex-row", "");
    for (href, text) in [
        ("https://google.com", "Google"),
        ("https://duckduckgo.com", "DuckDuckGo"),
        ("https://github.com", "GitHub"),
    ] {
        nav.append_child(nw.a(href, text, (), ""));
    }
    nav
}

fn form(nw: Nodeworthy) -> Element {
    let mut form = nw.form(
        FormOptions {
            name: Some("dummy-form".into()),
            action: Some("/".into()),
            method: Some("post".into()),
            target: Some("_self".into()),
            autocomplete: Some("off".into()),
            ..Default::default()
        },
        "flex-column",
        "dummy-form",
    );

    let row = |label: &str, id: &str, input: Element| {
        let mut row = nw.div("flex-row", "");
        row.append_child(nw.label(label, id, "text-right", ""));
        row.append_child(input);
        row
    };

    form.append_child(row(
        "Name:",
        "input-name",
        nw.input_text(
            TextInputOptions {
                name: Some("name".into()),
                placeholder: Some("John Doe".into()),
                required: Some(true),
                ..Default::default()
            },
            (),
            "input-name",
        ),
    ));
    form.append_child(row(
        "Age:",
        "input-age",
        nw.input_number(
            NumberInputOptions {
                name: Some("age".into()),
                placeholder: Some("21".into()),
                min: Some(1.0),
                step: Some(1.0),
                required: Some(true),
                ..Default::default()
            },
            (),
            "input-age",
        ),
    ));
    form.append_child(row(
        "CC:",
        "input-cc",
        nw.input_text(
            TextInputOptions {
                name: Some("country".into()),
                placeholder: Some("US".into()),
                minlength: Some(2),
                maxlength: Some(2),
                pattern: Some("[A-Za-z]+".into()),
                required: Some(true),
                ..Default::default()
            },
            (),
            "input-cc",
        ),
    ));
    form.append_child(row(
        "Email:",
        "input-email",
        nw.input_email(
            EmailInputOptions {
                text: TextInputOptions {
                    name: Some("email".into()),
                    placeholder: Some("john@fakemail.com".into()),
                    required: Some(true),
                    ..Default::default()
                },
                multiple: Some(false),
            },
            (),
            "input-email",
        ),
    ));

    form.append_child(nw.button("Submit", (), ""));
    form
}

fn lists(nw: Nodeworthy) -> Element {
    let mut div = nw.div("flex-column", "div-lists");
    div.append_child(nw.h("Lists", 2, "border-bottom text-center", ""));

    let mut ol = nw.ol((), "");
    let mut ul = nw.ul((), "");
    for _ in 0..5 {
        ol.append_child(nw.li("Ordered list item", (), ""));
        ul.append_child(nw.li("Unordered list item", (), ""));
    }

    let mut row = nw.div("flex-row", "");
    row.append_child(ol);
    row.append_child(ul);
    div.append_child(row);
    div
}

fn table(nw: Nodeworthy, people: &[Person]) -> Element {
    let mut thead = nw.thead((), "");

    let mut top = nw.tr((), "");
    top.append_child(nw.th("#", CellOptions::rowspan(2), "table-index text-center", ""));
    top.append_child(nw.th("Name", CellOptions::default(), "text-center", ""));
    top.append_child(nw.th("Age", CellOptions::default(), "table-age text-center", ""));
    top.append_child(nw.th("CC", CellOptions::default(), "table-cc text-center", ""));
    thead.append_child(top);

    let mut bottom = nw.tr((), "");
    bottom.append_child(nw.th("Email", CellOptions::colspan(3), (), ""));
    thead.append_child(bottom);

    let mut tbody = nw.tbody((), "");
    for (i, person) in people.iter().enumerate() {
        // cells take markup, so user input is escaped first
        let cell = |text: &str| html_escape::encode_text(text).to_string();

        let index = (i + 1).to_string();
        let single = CellOptions::default();

        let mut top = nw.tr((), "");
        top.append_child(nw.td(&index, CellOptions::rowspan(2), "table-index text-center", ""));
        top.append_child(nw.td(&cell(&person.name), single, "text-center", ""));
        top.append_child(nw.td(&cell(&person.age), single, "table-age text-center", ""));
        top.append_child(nw.td(&cell(&person.country), single, "table-cc text-center", ""));
        tbody.append_child(top);

        let email = cell(&person.email);
        let mut bottom = nw.tr((), "");
        bottom.append_child(nw.td(&email, CellOptions::colspan(3), "text-center", ""));
        tbody.append_child(bottom);
    }

    let mut table = nw.table((), "");
    table.append_child(thead);
    table.append_child(tbody);

    let mut container = nw.div((), "table-container");
    container.append_child(table);
    container
}
