//! Markdown rendering for extracted endpoints

use crate::extract::ApiEndpoint;

/// Render endpoints as a markdown document
pub fn render_markdown(endpoints: &[ApiEndpoint]) -> String {
  let mut docs = String::from("# API Documentation\n\n");

  for endpoint in endpoints {
    docs.push_str(&format!("## {}\n\n", endpoint.name));
    if let Some(docstring) = &endpoint.docstring {
      docs.push_str(&format!("{docstring}\n\n"));
    }
    docs.push_str(&format!("**Parameters**: {}\n\n", endpoint.params.join(", ")));
    docs.push_str(&format!("**Returns**: {}\n\n", endpoint.returns));
    docs.push_str("---\n\n");
  }

  docs
}
