//! Demo view set
//!
//! Route keys: `/`, `/about`, `/projects`, `/contact`, `/components`, and
//! the `404` fallback.

use folio_router::{Registry, Result, View};

const HOME: &str = r##"
<section class="py-16">
  <div class="container mx-auto px-4 text-center">
    <h1 class="text-5xl font-bold text-content mb-6">Welcome Home</h1>
    <p class="text-lg text-content-muted mb-8">This is the home page of our SPA.</p>
    <a href="#/about" class="bg-primary-500 hover:bg-primary-900 text-content-inverted font-bold py-3 px-8 rounded-4xl shadow-elevated transition-colors">
      Learn About Us
    </a>
  </div>
</section>
"##;

const ABOUT: &str = r##"
<section class="py-16">
  <div class="container mx-auto px-4">
    <h1 class="text-4xl font-bold text-content mb-6">About Us</h1>
    <div class="max-w-3xl mx-auto">
      <p class="text-lg text-content mb-4">
        We build modern web applications with Tailwind CSS and a small Rust core.
        Our focus is on accessibility, performance, and user experience.
      </p>
      <p class="text-lg text-content-muted mb-6">
        This SPA demonstrates routing, responsive design, and progressive enhancement.
      </p>
      <a href="#/" class="text-primary-500 hover:text-primary-900 font-medium">&larr; Back to Home</a>
    </div>
  </div>
</section>
"##;

const PROJECTS: &str = r##"
<section class="py-16">
  <div class="container mx-auto px-4">
    <h1 class="text-4xl font-bold text-content mb-6">Our Projects</h1>
    <div class="max-w-3xl mx-auto">
      <p class="text-lg text-content-muted mb-6">
        Coming soon: A showcase of projects built with modern web technologies.
      </p>
      <a href="#/" class="text-primary-500 hover:text-primary-900 font-medium">&larr; Back to Home</a>
    </div>
  </div>
</section>
"##;

const CONTACT: &str = r##"
<section class="py-16">
  <div class="container mx-auto px-4">
    <h1 class="text-4xl font-bold text-content mb-6">Contact</h1>
    <form id="contact-form" class="max-w-xl mx-auto space-y-4">
      <label class="block">
        <span class="text-content">Name</span>
        <input name="name" type="text" required class="mt-1 block w-full rounded-lg border p-2">
      </label>
      <label class="block">
        <span class="text-content">Email</span>
        <input name="email" type="email" required class="mt-1 block w-full rounded-lg border p-2">
      </label>
      <label class="block">
        <span class="text-content">Message</span>
        <textarea name="message" rows="4" required class="mt-1 block w-full rounded-lg border p-2"></textarea>
      </label>
      <button type="submit" class="bg-primary-500 hover:bg-primary-900 text-content-inverted font-bold py-3 px-8 rounded-4xl shadow-elevated transition-colors">
        Send
      </button>
      <p id="contact-status" class="text-content-muted" role="status" aria-live="polite"></p>
    </form>
  </div>
</section>
"##;

const COMPONENTS: &str = r##"
<section class="py-16">
  <div class="container mx-auto px-4">
    <h1 class="text-4xl font-bold text-content mb-6">Components</h1>
    <nav class="mb-8 space-x-4" aria-label="Sections">
      <a href="#buttons" class="text-primary-500 hover:text-primary-900">Buttons</a>
      <a href="#cards" class="text-primary-500 hover:text-primary-900">Cards</a>
    </nav>
    <div id="buttons" class="mb-12 space-x-4">
      <h2 class="text-2xl font-bold text-content mb-4">Buttons</h2>
      <button class="bg-primary-500 hover:bg-primary-900 text-content-inverted font-bold py-3 px-8 rounded-4xl shadow-elevated">Primary</button>
      <button class="border border-primary-500 text-primary-500 font-bold py-3 px-8 rounded-4xl">Secondary</button>
    </div>
    <div id="cards" class="grid gap-6 md:grid-cols-2">
      <h2 class="text-2xl font-bold text-content mb-4 md:col-span-2">Cards</h2>
      <article class="rounded-lg shadow-elevated p-6">
        <h3 class="text-xl font-bold text-content mb-2">Card title</h3>
        <p class="text-content-muted">Cards group related content and actions.</p>
      </article>
      <article class="rounded-lg shadow-elevated p-6">
        <h3 class="text-xl font-bold text-content mb-2">Another card</h3>
        <p class="text-content-muted">Spacing and radius come from the design tokens.</p>
      </article>
    </div>
  </div>
</section>
"##;

const NOT_FOUND: &str = r##"
<section class="py-16">
  <div class="container mx-auto px-4 text-center">
    <h1 class="text-4xl font-bold text-content mb-6">Page Not Found</h1>
    <p class="text-lg text-content-muted mb-8">The page you're looking for doesn't exist.</p>
    <a href="#/" class="bg-primary-500 hover:bg-primary-900 text-content-inverted font-bold py-3 px-8 rounded-4xl shadow-elevated transition-colors">
      Go Home
    </a>
  </div>
</section>
"##;

fn contact() -> View {
    let view = View::new(CONTACT);
    #[cfg(feature = "wasm")]
    let view = view.with_script(crate::host::wire_contact_form);
    view
}

/// Build the demo registry
pub fn registry() -> Result<Registry> {
    Registry::builder()
        .view("/", View::new(HOME))
        .view("/about", View::new(ABOUT))
        .view("/projects", View::new(PROJECTS))
        .view("/contact", contact())
        .view("/components", View::new(COMPONENTS))
        .view("404", View::new(NOT_FOUND))
        .build()
}
