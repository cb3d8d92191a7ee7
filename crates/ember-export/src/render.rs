use serde::Serialize;
use tera::{Context, Tera};

use crate::error::{ExportError, describe};
use crate::report::ReportContext;

pub const REPORT_TEMPLATE_NAME: &str = "assessment-report.md";

/// Built-in report layout. Page breaks (`---`) split the scores from the
/// protocol and the protocol from the footer.
pub const REPORT_TEMPLATE: &str = r#"# {{ title }}
> Completed on {{ completed_on }}

## Your Primary Profile
**{{ primary_profile }}**
{{ profile_note }}

## Section Scores
{% for section in sections %}
### {{ section.title }}
**{{ section.score }}/{{ section.max_score }}** {{ section.bar }}
{{ section.impact_label }}
{% endfor %}
{%- if priorities %}
## Priority Areas for Attention
These areas scored 17+ points and should be your primary focus:
{% for priority in priorities -%}
- **#{{ priority.rank }}** {{ priority.title }} ({{ priority.score }}/{{ priority.max_score }} points)
{% endfor %}
{%- endif %}
{%- if protocol %}
---
## Your Personalized Protocol
{{ protocol.description }}

### Core Supplement Protocol
{% for supplement in protocol.supplements -%}
- {{ supplement }}
{% endfor %}
### Immediate Lifestyle Changes
{% for category in protocol.lifestyle -%}
**{{ category.name }}**
{% for item in category.items -%}
- {{ item }}
{% endfor %}
{% endfor -%}
### Optional Support
Consider these if no improvement after following the core protocol for {{ protocol.optional_after }}:
{% for extra in protocol.optional -%}
- {{ extra }}
{% endfor %}
{%- else %}
No protocol recommendation is available for this profile.
{%- endif %}

{% for line in footer -%}
> {{ line }}
{% endfor %}"#;

/// Render a Tera template against any serializable context.
///
/// The context's fields become the template variables.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse {
            name: template_name.to_string(),
            reason: describe(&e),
        })?;

    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render the built-in assessment report.
pub fn render_report(context: &ReportContext) -> Result<String, ExportError> {
    render_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE, context)
}
