//! Templates for artifacts produced by `pebble generate`

/// Controller class with `index` and `show` actions
pub const CONTROLLER: &str = r"package {{namespace}}::Controller::{{name}};
use strict;
use warnings;

sub new {
    my ($class, %args) = @_;
    return bless {%args}, $class;
}

# GET /{{route}}
sub index {
    my ($self, $c) = @_;
    return $c->json({ message => 'Hello from {{name}} controller' });
}

# GET /{{route}}/:id
sub show {
    my ($self, $c) = @_;
    my $id = $c->param('id');
    return $c->json({ id => $id });
}

1;
";

/// Model class backed by an in-memory keyed store
///
/// Identifiers combine the current time in milliseconds with a random
/// suffix. `create` draws again if the identifier is already taken.
pub const MODEL: &str = r"package {{namespace}}::Model::{{name}};
use strict;
use warnings;

use Time::HiRes ();

sub new {
    my ($class) = @_;
    return bless { store => {} }, $class;
}

sub find {
    my ($self, $id) = @_;
    return $self->{store}{$id};
}

sub all {
    my ($self) = @_;
    return [ values %{ $self->{store} } ];
}

sub create {
    my ($self, $data) = @_;
    my $id;
    do {
        $id = _generate_id();
    } while exists $self->{store}{$id};
    $self->{store}{$id} = { %$data, id => $id };
    return $self->{store}{$id};
}

sub update {
    my ($self, $id, $data) = @_;
    my $record = $self->{store}{$id} or return;
    %$record = (%$record, %$data, id => $id);
    return $record;
}

sub delete {
    my ($self, $id) = @_;
    return delete $self->{store}{$id};
}

sub _generate_id {
    return sprintf '%d-%04d', int(Time::HiRes::time() * 1000), int(rand(10_000));
}

1;
";

/// Page fragment rendered inside the layout
pub const FRAGMENT: &str = r#"<section class="{{name}}">
    <h1>[% title %]</h1>
</section>
"#;
