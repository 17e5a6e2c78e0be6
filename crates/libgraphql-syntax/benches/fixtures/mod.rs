//! Source texts shared by the parse benchmarks.

pub mod generated;

pub const STARWARS_SCHEMA: &str = r#"
"""
The root of every read.
"""
schema {
  query: Query
  mutation: Mutation
}

type Query {
  hero(episode: Episode): Character
  human(id: ID!): Human
  droid(id: ID!): Droid
  search(text: String, first: Int = 10): [SearchResult!]!
}

type Mutation {
  createReview(episode: Episode, review: ReviewInput!): Review
}

"The episodes in the original trilogy."
enum Episode {
  NEWHOPE
  EMPIRE
  JEDI @deprecated(reason: "Use `RETURN`.")
}

interface Character {
  id: ID!
  name: String!
  friends(first: Int, after: String): [Character]
  appearsIn: [Episode]!
}

type Human implements Character & Node @key(fields: "id") {
  id: ID!
  name: String!
  friends(first: Int, after: String): [Character]
  appearsIn: [Episode]!
  homePlanet: String
  height(unit: LengthUnit = METER): Float
  mass: Float
}

type Droid implements Character & Node {
  id: ID!
  name: String!
  friends(first: Int, after: String): [Character]
  appearsIn: [Episode]!
  primaryFunction: String
}

union SearchResult = Human | Droid | Starship

input ReviewInput {
  stars: Int!
  commentary: String
  favoriteColor: ColorInput = { red: 0, green: 0, blue: 255 }
}

scalar DateTime @specifiedBy(url: "https://tools.ietf.org/html/rfc3339")

directive @key(fields: String!) repeatable on OBJECT | INTERFACE

extend type Query {
  starship(id: ID!): Starship
}
"#;

pub const SIMPLE_QUERY: &str = "{ hero { name } }";

pub const COMPLEX_QUERY: &str = r#"
query HeroDetails($episode: Episode = JEDI, $withFriends: Boolean!, $first: Int = 5)
  @cached(ttl: 60) {
  hero(episode: $episode) {
    __typename
    id
    heroName: name
    ...CharacterFields
    ... on Droid {
      primaryFunction
    }
    ... @include(if: $withFriends) {
      friends(first: $first) {
        name
        appearsIn
      }
    }
  }
  search(text: "an \"escaped\" é string", filter: { kinds: [HUMAN, DROID], minHeight: 1.5e0 }) {
    ... on Human { height(unit: FOOT) }
  }
}

fragment CharacterFields on Character {
  name
  appearsIn
  friends { id name }
}

mutation AddReview($review: ReviewInput!) {
  createReview(episode: JEDI, review: $review) { stars commentary }
}
"#;
