use anyhow::{anyhow, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .map_err(|e| anyhow!("launch options: {e}"))?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn text(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        Ok(element.get_inner_text()?)
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    pub fn url(&self) -> String {
        self.tab.get_url()
    }

    /// Value of a JavaScript expression evaluated in the page.
    pub fn eval(&self, expression: &str) -> Result<Value> {
        let object = self.tab.evaluate(expression, false)?;
        Ok(object.value.unwrap_or(Value::Null))
    }

    pub fn document_lang(&self) -> Result<String> {
        Ok(self
            .eval("document.documentElement.lang")?
            .as_str()
            .unwrap_or_default()
            .to_string())
    }

    pub fn stored_language(&self) -> Result<Option<String>> {
        Ok(self
            .eval("window.localStorage.getItem('language')")?
            .as_str()
            .map(str::to_string))
    }

    /// Poll `check` until it holds; the client resolves the language after hydration.
    pub fn wait_until(&self, timeout: Duration, mut check: impl FnMut(&Self) -> Result<bool>) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if check(self)? {
                return Ok(());
            }
            if Instant::now() >= deadline {
                anyhow::bail!("condition not met within {timeout:?} at {}", self.url());
            }
            std::thread::sleep(Duration::from_millis(100));
        }
    }
}
