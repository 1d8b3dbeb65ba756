//! Class documents shared by the corpus tests.

pub const PUT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<VNCLASS ID="put-9.1">
  <MEMBERS>
    <MEMBER name="put" wn="put%2:35:00" grouping="put.01"/>
    <MEMBER name="place" wn="?place%2:35:00"/>
  </MEMBERS>
  <THEMROLES>
    <THEMROLE type="Agent">
      <SELRESTRS logic="or"><SELRESTR Value="+" type="animate"/><SELRESTR Value="+" type="organization"/></SELRESTRS>
    </THEMROLE>
    <THEMROLE type="Theme"><SELRESTRS><SELRESTR Value="+" type="concrete"/></SELRESTRS></THEMROLE>
    <THEMROLE type="Destination"><SELRESTRS/></THEMROLE>
  </THEMROLES>
  <FRAMES>
    <FRAME>
      <DESCRIPTION primary="NP V NP PP.destination"/>
      <SYNTAX>
        <NP value="Agent"><SYNRESTRS/></NP>
        <VERB/>
        <NP value="Theme"><SYNRESTRS/></NP>
        <PREP><SELRESTRS><SELRESTR Value="+" type="loc"/></SELRESTRS></PREP>
        <NP value="Destination"><SYNRESTRS/></NP>
      </SYNTAX>
    </FRAME>
  </FRAMES>
  <SUBCLASSES>
    <VNSUBCLASS ID="put-9.1-1">
      <MEMBERS><MEMBER name="stash" wn=""/></MEMBERS>
      <THEMROLES>
        <THEMROLE type="Agent"><SELRESTRS><SELRESTR Value="+" type="machine"/></SELRESTRS></THEMROLE>
      </THEMROLES>
      <FRAMES>
        <FRAME>
          <DESCRIPTION primary="NP V NP ADV"/>
          <SYNTAX>
            <NP value="Agent"><SYNRESTRS/></NP>
            <VERB/>
            <NP value="Theme"><SYNRESTRS/></NP>
            <ADV/>
          </SYNTAX>
        </FRAME>
      </FRAMES>
      <SUBCLASSES>
        <VNSUBCLASS ID="put-9.1-1-1">
          <MEMBERS/>
          <FRAMES/>
          <SUBCLASSES/>
        </VNSUBCLASS>
      </SUBCLASSES>
    </VNSUBCLASS>
  </SUBCLASSES>
</VNCLASS>"#;

pub const GIVE: &str = r#"<VNCLASS ID="give-13.1">
  <MEMBERS>
    <MEMBER name="give" wn="give%2:40:00"/>
    <MEMBER name="hand" wn="hand%2:40:00"/>
  </MEMBERS>
  <THEMROLES>
    <THEMROLE type="Agent"><SELRESTRS/></THEMROLE>
    <THEMROLE type="Theme"><SELRESTRS/></THEMROLE>
    <THEMROLE type="Recipient"><SELRESTRS/></THEMROLE>
  </THEMROLES>
  <FRAMES>
    <FRAME>
      <DESCRIPTION primary="NP V NP NP"/>
      <SYNTAX>
        <NP value="Agent"><SYNRESTRS/></NP>
        <VERB/>
        <NP value="Recipient"><SYNRESTRS/></NP>
        <NP value="Theme"><SYNRESTRS/></NP>
      </SYNTAX>
    </FRAME>
  </FRAMES>
  <SUBCLASSES/>
</VNCLASS>"#;
