//! Template file contents for new projects
//!
//! Placeholders in `{{...}}` are filled in by the CLI when the project is
//! created. Placeholders in `[% ... %]` belong to Text::Xslate and are left
//! for the generated application to fill in at request time.

/// `app.psgi` entry-point script
pub const ENTRY_POINT: &str = r#"#!/usr/bin/env perl
# {{app_name}} - Built with Pebble
use strict;
use warnings;

use FindBin;
use lib "$FindBin::Bin/lib";

use Plack::Builder;
use Plack::App::File;
use Pebble;

my $root = $FindBin::Bin;

my $app = Pebble->new(
    name      => '{{app_name}}',
    templates => "$root/templates",
    layout    => 'layouts/main.tt',
);

# Routes
$app->get('/' => sub {
    my ($c) = @_;
    return $c->render('index.tt', { title => 'Welcome to {{app_name}}' }, layout => undef);
});

builder {
    mount '/css'    => Plack::App::File->new(root => "$root/public/css")->to_app;
    mount '/js'     => Plack::App::File->new(root => "$root/public/js")->to_app;
    mount '/images' => Plack::App::File->new(root => "$root/public/images")->to_app;
    mount '/'       => $app->to_app;
};
"#;

/// `cpanfile` dependency manifest
pub const MANIFEST: &str = r"requires 'perl', '5.020';

requires 'Pebble', '0.1';
requires 'Text::Xslate', '3.5';
requires 'Plack', '1.0048';

on 'test' => sub {
    requires 'Test::More', '0.98';
    requires 'Plack::Test';
    requires 'HTTP::Request::Common';
};
";

/// `.gitignore`
pub const GITIGNORE: &str = r"# Perl build artifacts
/blib/
/_build/
/Build
/Build.bat
/MYMETA.*
/Makefile
/Makefile.old
/pm_to_blib
/local/
/.carton/
*.bak
*.o
*.tar.gz

# Editors
.idea/
.vscode/
*.swp
*.swo
*~

# OS
.DS_Store
Thumbs.db

# Logs
*.log
";

/// `README.md`
pub const README_MD: &str = r"# {{app_name}}

A web application built with the Pebble micro-framework.

## Installation

Install the dependencies listed in `cpanfile`:

```bash
cpanm --installdeps .
```

## Running

Start the application with the Pebble development server:

```bash
pebble server
```

Then open http://localhost:5678 in your browser.

### Development mode

Restart the server automatically whenever `lib/` or `templates/` change:

```bash
pebble server --reload
```

Use `--port` and `--host` to change the network binding.

## Testing

```bash
prove -lr t
```

## Project Structure

```
{{app_name}}/
├── app.psgi        # Application entry point
├── cpanfile        # Dependencies
├── pebble.toml     # Pebble CLI settings
├── lib/            # Controllers and models
├── templates/      # Text::Xslate templates
├── public/         # Static assets (css, js)
└── t/              # Tests
```

## Generators

```bash
pebble generate controller Users
pebble generate model User
pebble generate template about
```
";

/// `templates/layouts/main.tt` page layout
pub const TEMPLATE_LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>[% title %] | {{app_name}}</title>
    <link rel="stylesheet" href="/css/style.css">
</head>
<body>
    <header class="site-header">
        <a class="brand" href="/">{{app_name}}</a>
    </header>

    <main class="container">
        [% content | mark_raw %]
    </main>

    <footer class="site-footer">
        <p>Powered by Pebble</p>
    </footer>
</body>
</html>
"#;

/// `public/css/style.css`
pub const STATIC_CSS: &str = r"* {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    color: #2d3748;
    background: #f7fafc;
}

.container {
    max-width: 960px;
    margin: 0 auto;
    padding: 2rem 1rem;
}

.site-header {
    padding: 1rem;
    background: #2b6cb0;
}

.site-header .brand {
    color: #fff;
    font-weight: 600;
    text-decoration: none;
}

.site-footer {
    padding: 2rem 1rem;
    text-align: center;
    color: #718096;
    font-size: 0.875rem;
}

.banner {
    padding: 1.5rem;
    border-radius: 0.5rem;
    background: #c6f6d5;
    color: #22543d;
}

.features li {
    margin-bottom: 0.5rem;
}

pre {
    padding: 1rem;
    border-radius: 0.375rem;
    background: #1a202c;
    color: #e2e8f0;
    overflow-x: auto;
}
";

/// `templates/index.tt` home page
///
/// A standalone document rendered without the layout.
pub const TEMPLATE_HOME: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{app_name}}</title>
    <link rel="stylesheet" href="/css/style.css">
</head>
<body>
    <main class="container">
        <div class="banner">
            <h1>{{app_name}} is up and running!</h1>
            <p>Your Pebble application was created successfully.</p>
        </div>

        <h2>What you get</h2>
        <ul class="features">
            <li>Minimal routing with Pebble</li>
            <li>Text::Xslate templates with a shared layout</li>
            <li>Static files served from <code>public/</code></li>
            <li>A test suite ready for <code>prove</code></li>
            <li>Generators for controllers, models and templates</li>
        </ul>

        <h2>Quick start</h2>
        <pre>pebble generate controller Users
pebble generate model User
pebble server --reload</pre>

        <p>Edit <code>app.psgi</code> to add routes and <code>templates/index.tt</code> to change this page.</p>
    </main>
</body>
</html>
"#;

/// `t/01-basic.t` smoke test
pub const TEST_BASIC: &str = r"use strict;
use warnings;

use FindBin;
use Test::More;
use Plack::Test;
use Plack::Util;
use HTTP::Request::Common;

my $app  = Plack::Util::load_psgi(qq($FindBin::Bin/../app.psgi));
my $test = Plack::Test->create($app);

my $res = $test->request(GET '/');
is $res->code, 200, 'GET / returns 200';
like $res->content, qr/is up and running/, 'home page rendered for {{app_name}}';

done_testing;
";

/// `pebble.toml` CLI settings for the project
pub const CONFIG_TOML: &str = r#"# Pebble CLI settings for {{app_name}}
#
# Command-line flags take precedence over these values, and environment
# variables such as PEBBLE_SERVER__PORT take precedence over this file.

[server]
host = "0.0.0.0"
port = 5678
reload = false
runner = "plackup"
watch = ["lib", "templates"]
"#;
