//! Plain-text rendering of views.

use anyhow::Result;
use minijinja::{Environment, context};

use super::{EMPTY_MESSAGE, NoteDetail, NoteEditor, NoteList, NoteRow};
use crate::domain::Banner;

/// Template for the note list.
pub const LIST_TEMPLATE: &str = r#"{{ heading }} ({{ rows | length }})
{% if not rows %}
{{ empty }}
{% else %}
{% for row in rows %}
{{ "> " if row.selected else "  " }}{{ row.short_id }}  {{ row.title }}{% if row.deleting %}  …{% endif %}

      {{ row.snippet }}
{% endfor %}
{% endif %}
"#;

/// Template for a single note.
pub const DETAIL_TEMPLATE: &str = r#"{{ title }}
Updated {{ updated }}  #{{ id }}

{{ content }}
"#;

/// Template for a status banner.
pub const BANNER_TEMPLATE: &str = r#"[{{ kind }}] {{ message }}
"#;

/// Template for the editor form.
pub const EDITOR_TEMPLATE: &str = r#"{{ heading }}
Title: {{ title }}
{% if title_error %}
  ! {{ title_error }}
{% endif %}
Content:
{{ content }}
{% if content_error %}
  ! {{ content_error }}
{% endif %}
[{{ submit }}]
"#;

/// Renders views with a fixed set of text templates.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template("list", LIST_TEMPLATE)?;
        env.add_template("detail", DETAIL_TEMPLATE)?;
        env.add_template("banner", BANNER_TEMPLATE)?;
        env.add_template("editor", EDITOR_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn list(&self, list: &NoteList, rows: &[NoteRow]) -> Result<String> {
        let tmpl = self.env.get_template("list")?;
        Ok(tmpl.render(context! {
            heading => list.heading(),
            rows => rows,
            empty => EMPTY_MESSAGE,
        })?)
    }

    pub fn detail(&self, detail: &NoteDetail) -> Result<String> {
        let tmpl = self.env.get_template("detail")?;
        Ok(tmpl.render(detail)?)
    }

    pub fn banner(&self, banner: &Banner) -> Result<String> {
        let tmpl = self.env.get_template("banner")?;
        Ok(tmpl.render(context! {
            kind => banner.kind().as_str(),
            message => banner.message(),
        })?)
    }

    pub fn editor(&self, editor: &NoteEditor) -> Result<String> {
        let tmpl = self.env.get_template("editor")?;
        let errors = editor.errors();
        Ok(tmpl.render(context! {
            heading => editor.heading(),
            title => editor.title(),
            content => editor.content(),
            title_error => errors.title().map(|e| e.to_string()),
            content_error => errors.content().map(|e| e.to_string()),
            submit => editor.submit_text(),
        })?)
    }
}
