// src/bin/seed.rs
// Seed a running imager instance with a demo user, photos and an album
use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use reqwest::{redirect::Policy, Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use std::env;
use std::time::{Duration, Instant};

// --- ANSI colors ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const PHOTO_COUNT: usize = 10;
const ALBUM_SIZE: usize = 3;

#[derive(Deserialize, Debug)]
struct Session {
    token: String,
}

#[derive(Deserialize, Debug)]
struct PhotoItem {
    id: i64,
    title: String,
}

struct Seeder {
    base_url: String,
    client: Client,
    token: Option<String>,
}

impl Seeder {
    fn new(base_url: String) -> Result<Self> {
        // Form posts answer with 302; keep them visible instead of following
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .redirect(Policy::none())
            .build()
            .context("building HTTP client")?;

        Ok(Self {
            base_url,
            client,
            token: None,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self) -> Result<String> {
        match &self.token {
            Some(token) => Ok(format!("Bearer {}", token)),
            None => bail!("not logged in"),
        }
    }

    async fn check_health(&self) -> bool {
        match self.client.get(self.url("/health")).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    /// Register the account; an existing account is fine
    async fn register(&self, username: &str, email: &str, password: &str) -> Result<()> {
        let resp = self
            .client
            .post(self.url("/accounts/register/"))
            .json(&json!({
                "username": username,
                "email": email,
                "password1": password,
                "password2": password,
            }))
            .send()
            .await?;

        match resp.status() {
            StatusCode::CREATED => println!("{}✅ Registered {}{}", GREEN, username, RESET),
            StatusCode::OK => {
                let body: Value = resp.json().await?;
                println!("{}⚠️  Registration form returned errors: {}{}", YELLOW, body["errors"], RESET);
            }
            other => bail!("register failed with HTTP {}", other),
        }
        Ok(())
    }

    async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let resp = self
            .client
            .post(self.url("/accounts/login/"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;

        if !resp.status().is_success() {
            bail!("login failed with HTTP {}", resp.status());
        }

        let session: Session = resp.json().await.context("parsing session")?;
        self.token = Some(session.token);
        Ok(())
    }

    /// POST a form; 302 means saved, 200 means it came back with errors
    async fn submit(&self, path: &str, form: &Value) -> Result<()> {
        let resp = self
            .client
            .post(self.url(path))
            .header("Authorization", self.bearer()?)
            .json(form)
            .send()
            .await?;

        match resp.status() {
            StatusCode::FOUND => Ok(()),
            StatusCode::OK => {
                let body: Value = resp.json().await?;
                bail!("{} rejected: {}", path, body["errors"])
            }
            other => bail!("{} failed with HTTP {}", path, other),
        }
    }

    async fn my_photos(&self) -> Result<Vec<PhotoItem>> {
        let resp = self
            .client
            .get(self.url("/api/photos/"))
            .header("Authorization", self.bearer()?)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }

    async fn run(&mut self, username: &str, password: &str) -> Result<()> {
        let email = format!("{}@example.org", username);
        self.register(username, &email, password).await?;
        self.login(username, password).await?;

        let started = Instant::now();
        for i in 0..PHOTO_COUNT {
            let form = json!({
                "title": format!("image{}", i),
                "description": format!("Description for image{}", i),
                "published": if i % 3 == 0 { "Private" } else { "Public" },
                "image": format!("albums/image{}.jpg", i),
                "tags": if i % 2 == 0 { "even, demo" } else { "odd, demo" },
            });
            self.submit("/images/photos/add/", &form).await?;
            println!("{}  • uploaded image{}{}", CYAN, i, RESET);
        }

        let photos = self.my_photos().await?;
        let picked: Vec<i64> = photos.iter().take(ALBUM_SIZE).map(|p| p.id).collect();
        let cover = picked.first().copied();

        self.submit(
            "/images/album/add/",
            &json!({
                "title": "Blue Pictures",
                "description": "A test album.",
                "photos": picked,
                "cover": cover,
            }),
        )
        .await?;

        println!(
            "\n{}✨ Seeded {} photos and 1 album in {:.1}s{}",
            GREEN,
            photos.len(),
            started.elapsed().as_secs_f64(),
            RESET
        );
        for photo in photos.iter().take(ALBUM_SIZE) {
            println!("  • album member: {} ({})", photo.title, photo.id);
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let base_url = env::var("IMAGER_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let username = env::var("SEED_USERNAME").unwrap_or_else(|_| "acutebird".to_string());
    let password = env::var("SEED_PASSWORD").unwrap_or_else(|_| ":LSKDjfsd89s".to_string());

    let mut seeder = Seeder::new(base_url)?;

    println!("\n{}🔍 Checking service status...{}", CYAN, RESET);
    if !seeder.check_health().await {
        println!("{}❌ Service unavailable at {}{}", RED, seeder.base_url, RESET);
        std::process::exit(1);
    }

    println!("{}🚀 Seeding as {}{}", BOLD, username, RESET);
    seeder.run(&username, &password).await
}
